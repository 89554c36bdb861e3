//! The chat transcript: an append-only list of user and assistant entries.
//!
//! The submission handler writes through the [`Transcript`] trait so that it
//! can drive a terminal, an in-memory buffer, or anything else that shows
//! entries in order.

mod memory;
mod terminal;

use std::fmt;

pub use memory::MemoryTranscript;
pub use terminal::TerminalTranscript;

/// Who an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("user"),
            Self::Assistant => f.write_str("assistant"),
        }
    }
}

/// One rendered message. Never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    role: Role,
    text: String,
}

impl Entry {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    pub const fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Display surface for chat entries.
pub trait Transcript {
    /// Adds an entry after every existing one.
    fn append(&mut self, entry: Entry);

    /// Brings the newest entry into view.
    fn scroll_to_end(&mut self);
}
