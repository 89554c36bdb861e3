//! One-shot prompt command handler.

use anyhow::{Context, Result, bail};
use std::sync::Mutex;
use tracing::debug;

use super::load_resolved_config;
use crate::bridge::BridgeClient;
use crate::chat::{ChatHandler, exchange};
use crate::config::ResolveOptions;
use crate::input::{InputReader, LineInput};
use crate::transcript::TerminalTranscript;
use crate::ui::Style;

pub struct SendOptions {
    pub prompt: Option<String>,
    pub file: Option<String>,
}

/// Sends one prompt and prints the exchange to stdout.
pub async fn run_send(send: SendOptions, options: &ResolveOptions) -> Result<()> {
    let config = load_resolved_config(options)?;

    let text = match send.prompt {
        Some(prompt) => prompt,
        None => InputReader::read(send.file.as_deref())?,
    };

    let client = BridgeClient::new(config.client_options())?;
    debug!(url = %client.prompt_url(), "sending one-shot prompt");
    crate::status!("{}", Style::secondary(format!("→ {}", client.prompt_url())));

    let handler = ChatHandler::new(client);
    let transcript = Mutex::new(TerminalTranscript::new());
    let mut input = LineInput::from(text);

    match exchange(&handler, &mut input, &transcript).await {
        None => bail!("Prompt is empty"),
        Some(result) => result.map(drop).context("Prompt failed"),
    }
}
