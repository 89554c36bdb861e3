use inquire::CustomUserError;
use inquire::autocompletion::{Autocomplete, Replacement};

use crate::input::trim_prompt;

/// A command typed in chat mode with a leading `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    Config,
    Health,
    Help,
    Quit,
    Unknown(String),
}

/// Names shown by autocomplete, with their help line.
const COMMAND_HELP: &[(&str, &str)] = &[
    ("config", "Show current connection settings"),
    ("health", "Check that the bridge is up"),
    ("help", "Show available commands"),
    ("quit", "Exit chat mode"),
];

impl SlashCommand {
    fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("config") => Self::Config,
            Some("health" | "ping") => Self::Health,
            Some("help" | "?") => Self::Help,
            Some("quit" | "exit" | "q") => Self::Quit,
            Some(name) => Self::Unknown(
                std::iter::once(name)
                    .chain(words)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            None => Self::Unknown(String::new()),
        }
    }
}

/// One line read from the chat prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A prompt for the bridge, already trimmed.
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(line: &str) -> Input {
    let line = trim_prompt(line);
    if line.is_empty() {
        Input::Empty
    } else if let Some(command) = line.strip_prefix('/') {
        Input::Command(SlashCommand::parse(command))
    } else {
        Input::Text(line.to_string())
    }
}

/// Completes `/` commands in the chat prompt.
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, CustomUserError> {
        let Some(typed) = input.strip_prefix('/') else {
            return Ok(Vec::new());
        };

        Ok(COMMAND_HELP
            .iter()
            .filter(|(name, _)| name.starts_with(typed))
            .map(|(name, help)| format!("/{name}  {help}"))
            .collect())
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, CustomUserError> {
        Ok(highlighted_suggestion
            .and_then(|s| s.split_whitespace().next().map(str::to_string)))
    }
}
