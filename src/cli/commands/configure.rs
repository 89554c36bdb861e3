//! Configure command handler for editing default settings.

use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Select, Text};

use crate::bridge::DEFAULT_ENDPOINT;
use crate::config::{BridgeConfig, ConfigFile, ConfigManager};
use crate::ui::{Style, handle_prompt_cancellation};

const NEW_BRIDGE: &str = "(add a new bridge)";

/// Runs the configure command.
///
/// With `show`, prints the current file. Otherwise lets the user pick or add
/// the default bridge and set the request timeout.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_current_defaults(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;
    print_current_defaults(manager, &config);

    let bridge = select_bridge(&mut config)?;
    let timeout_secs = prompt_timeout(config.chat.timeout_secs)?;

    config.chat.bridge = Some(bridge);
    config.chat.timeout_secs = timeout_secs;

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_current_defaults(manager: &ConfigManager, config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Current defaults"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}   {}",
        Style::label("bridge"),
        config
            .chat
            .bridge
            .as_deref()
            .map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("timeout"),
        config
            .chat
            .timeout_secs
            .map_or_else(not_set, |secs| Style::value(format!("{secs}s")))
    );
    for name in config.sorted_bridge_names() {
        let bridge = &config.bridges[name];
        println!(
            "  {} {}  {}",
            Style::label("bridge"),
            Style::value(name),
            Style::secondary(format!("{}{}", bridge.endpoint, bridge.prompt_path()))
        );
    }
    println!();
}

/// Picks an existing bridge or adds one, returning its name.
fn select_bridge(config: &mut ConfigFile) -> Result<String> {
    let mut options: Vec<String> = config
        .sorted_bridge_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    options.push(NEW_BRIDGE.to_string());

    let default_index = config
        .chat
        .bridge
        .as_deref()
        .and_then(|d| options.iter().position(|name| name == d))
        .unwrap_or(0);

    let selection = Select::new("Default bridge:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    if selection != NEW_BRIDGE {
        return Ok(selection);
    }

    let name = Text::new("Bridge name:")
        .with_default("home")
        .with_validator(|input: &str| {
            Ok(if input.trim().is_empty() {
                Validation::Invalid("Name cannot be empty".into())
            } else {
                Validation::Valid
            })
        })
        .prompt()?;

    let endpoint = Text::new("Endpoint:")
        .with_default(DEFAULT_ENDPOINT)
        .with_validator(|input: &str| {
            let input = input.trim();
            Ok(
                if input.starts_with("http://") || input.starts_with("https://") {
                    Validation::Valid
                } else {
                    Validation::Invalid("Endpoint must start with http:// or https://".into())
                },
            )
        })
        .prompt()?;

    let name = name.trim().to_string();
    config
        .bridges
        .insert(name.clone(), BridgeConfig::new(endpoint.trim()));
    Ok(name)
}

fn prompt_timeout(current: Option<u64>) -> Result<Option<u64>> {
    let current = current.map(|secs| secs.to_string()).unwrap_or_default();

    let answer = Text::new("Request timeout in seconds:")
        .with_initial_value(&current)
        .with_help_message("Leave empty or 0 to wait indefinitely")
        .with_validator(|input: &str| {
            let input = input.trim();
            Ok(if input.is_empty() || input.parse::<u64>().is_ok() {
                Validation::Valid
            } else {
                Validation::Invalid("Enter a whole number of seconds".into())
            })
        })
        .prompt()?;

    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(None);
    }
    let secs: u64 = answer.parse().context("Invalid timeout")?;
    Ok((secs > 0).then_some(secs))
}
