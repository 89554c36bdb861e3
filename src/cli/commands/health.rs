//! Health check command handler.

use anyhow::Result;

use super::load_resolved_config;
use crate::bridge::BridgeClient;
use crate::config::ResolveOptions;
use crate::ui::{Spinner, Style};

/// Checks the bridge's health endpoint.
///
/// Returns `Ok(false)` when the bridge is down or unhealthy; the reason has
/// already been printed.
pub async fn run_health(options: &ResolveOptions) -> Result<bool> {
    let config = load_resolved_config(options)?;
    let client = BridgeClient::new(config.client_options())?;

    let result = {
        let _spinner = Spinner::new("Checking bridge...");
        client.health().await
    };

    match result {
        Ok(body) => {
            println!(
                "{} {} is up ({})",
                Style::success("✓"),
                Style::value(client.endpoint()),
                Style::secondary(body)
            );
            Ok(true)
        }
        Err(e) => {
            eprintln!("{} {e}", Style::error("Error:"));
            Ok(false)
        }
    }
}
