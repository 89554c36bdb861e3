//! Chat mode UI components.

use crate::config::ResolvedConfig;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(url: &str) {
    println!(
        "{} {} - Chatting with {}",
        Style::header("bridge-chat"),
        Style::version(format!("v{VERSION}")),
        Style::secondary(url)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}     {}",
        Style::label("bridge"),
        config
            .bridge_name
            .as_deref()
            .map_or_else(|| Style::secondary("(none)"), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        Style::secondary(&config.endpoint)
    );
    println!(
        "  {}       {}",
        Style::label("path"),
        Style::value(&config.path)
    );
    println!(
        "  {}    {}",
        Style::label("timeout"),
        config.timeout.map_or_else(
            || Style::secondary("(none)"),
            |t| Style::value(format!("{}s", t.as_secs()))
        )
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}  {}",
        Style::command("/config"),
        Style::secondary("Show current connection settings")
    );
    println!(
        "  {}  {}",
        Style::command("/health"),
        Style::secondary("Check that the bridge is up")
    );
    println!(
        "  {}    {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}    {}",
        Style::command("/quit"),
        Style::secondary("Exit chat mode")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
