use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bridge_chat::cli::commands::send::SendOptions;
use bridge_chat::cli::commands::{bridges, chat, configure, health, send};
use bridge_chat::cli::{Args, Command};
use bridge_chat::output::{self, OutputConfig};

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "bridge_chat=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    init_tracing(args.verbose);

    let options = args.resolve_options();

    match args.command {
        None | Some(Command::Chat) => {
            chat::run_chat(&options).await?;
        }
        Some(Command::Send { prompt, file }) => {
            send::run_send(SendOptions { prompt, file }, &options).await?;
        }
        Some(Command::Health) => {
            if !health::run_health(&options).await? {
                std::process::exit(exitcode::UNAVAILABLE);
            }
        }
        Some(Command::Bridges { name }) => {
            bridges::print_bridges(name.as_deref())?;
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
    }

    Ok(())
}
