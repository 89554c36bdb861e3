use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::sync::Mutex;
use tracing::info;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::handler::{ChatHandler, Reply};
use super::ui;
use crate::bridge::{Backend, BridgeClient, BridgeError};
use crate::config::ResolvedConfig;
use crate::input::{LineInput, PromptInput};
use crate::transcript::{TerminalTranscript, Transcript};
use crate::ui::{Spinner, Style, is_prompt_cancelled};

const WAITING_MESSAGE: &str = "Waiting for the bridge...";

/// Runs one submission with a spinner shown while the bridge works.
///
/// The spinner is cleared before anything is rendered.
pub async fn exchange<B, I, T>(
    handler: &ChatHandler<B>,
    input: &mut I,
    transcript: &Mutex<T>,
) -> Option<Result<Reply, BridgeError>>
where
    B: Backend,
    I: PromptInput + ?Sized,
    T: Transcript + ?Sized,
{
    let prompt = handler.accept(input, transcript)?;

    let result = {
        let _spinner = Spinner::new(WAITING_MESSAGE);
        handler.backend().submit(&prompt).await
    };

    Some(handler.finish(result, transcript))
}

/// An interactive chat session with one bridge.
pub struct ChatSession {
    config: ResolvedConfig,
    handler: ChatHandler<BridgeClient>,
    transcript: Mutex<TerminalTranscript>,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: ResolvedConfig) -> Result<Self> {
        let client = BridgeClient::new(config.client_options())?;

        Ok(Self {
            config,
            handler: ChatHandler::new(client),
            transcript: Mutex::new(TerminalTranscript::new()),
        })
    }

    pub async fn run(&self) -> Result<()> {
        ui::print_header(&self.handler.backend().prompt_url());

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let line = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Ask the bridge, /help for commands, Ctrl+C to quit")
                .prompt();

            match line {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.send(LineInput::from(text)).await;
                    }
                },
                Err(e) if is_prompt_cancelled(&e) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Config => {
                ui::print_config(&self.config);
                true
            }
            SlashCommand::Health => {
                self.check_health().await;
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    async fn check_health(&self) {
        let result = {
            let _spinner = Spinner::new("Checking bridge...");
            self.handler.backend().health().await
        };

        match result {
            Ok(body) => println!(
                "{} Bridge is up ({})\n",
                Style::success("✓"),
                Style::secondary(body)
            ),
            Err(e) => ui::print_error(&e.to_string()),
        }
    }

    async fn send(&self, mut input: LineInput) {
        // Failures are already in the transcript; the session carries on.
        if let Some(Err(e)) = exchange(&self.handler, &mut input, &self.transcript).await {
            info!(connect = e.is_connect(), "request failed, continuing session");
        }
    }
}
