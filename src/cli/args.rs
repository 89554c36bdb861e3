use clap::{Parser, Subcommand};

use crate::config::ResolveOptions;

#[derive(Parser, Debug)]
#[command(name = "bridge-chat")]
#[command(about = "Chat with an IoT bridge from the terminal")]
#[command(version)]
pub struct Args {
    /// Bridge name from the config file
    #[arg(short = 'b', long, global = true)]
    pub bridge: Option<String>,

    /// Bridge base URL (overrides the configured bridge)
    #[arg(short = 'e', long, global = true, env = "BRIDGE_CHAT_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show debug logs on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress status output and the spinner
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// CLI overrides for configuration resolution.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            bridge: self.bridge.clone(),
            endpoint: self.endpoint.clone(),
            timeout_secs: self.timeout,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode (the default)
    Chat,
    /// Send a single prompt and print the reply
    Send {
        /// Prompt text (reads stdin if neither this nor --file is given)
        prompt: Option<String>,

        /// Read the prompt from a file
        #[arg(short = 'f', long, conflicts_with = "prompt")]
        file: Option<String>,
    },
    /// Check that the bridge is reachable
    Health,
    /// List configured bridges
    Bridges {
        /// Show details for a specific bridge
        name: Option<String>,
    },
    /// Configure bridge-chat settings
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
