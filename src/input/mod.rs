//! Prompt input sources: the interactive line buffer and one-shot readers.

mod line;
mod reader;

pub use line::{LineInput, PromptInput, trim_prompt};
pub use reader::{InputReader, MAX_INPUT_SIZE};
