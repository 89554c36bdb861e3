//! Chatting with a bridge: the submission handler and the interactive session.
//!
//! Provides a REPL-style interface with slash commands on top of
//! [`ChatHandler`], which can also be driven directly with any
//! [`PromptInput`](crate::input::PromptInput) and
//! [`Transcript`](crate::transcript::Transcript).

/// Slash command parsing and autocomplete.
pub mod command;
mod handler;
/// Text rendering of replies.
pub mod render;
mod session;
mod ui;

pub use handler::{ChatHandler, Reply};
pub use session::{ChatSession, exchange};
