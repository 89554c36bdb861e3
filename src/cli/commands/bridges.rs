//! Bridge listing command handler.

use anyhow::Result;

use crate::bridge::DEFAULT_ENDPOINT;
use crate::config::ConfigManager;
use crate::ui::Style;

/// Prints configured bridges to stdout.
///
/// If `specific_bridge` is provided, shows detailed information for that bridge.
/// Otherwise, lists all configured bridges with their endpoints.
pub fn print_bridges(specific_bridge: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default()?;

    if config.bridges.is_empty() {
        println!("No bridges configured (using {DEFAULT_ENDPOINT}).");
        println!("Add bridges to {}", manager.config_path().display());
        return Ok(());
    }

    let default_bridge = config.chat.bridge.as_deref();
    let marker = |name: &str| {
        if default_bridge == Some(name) {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(name) = specific_bridge {
        let Some(bridge) = config.bridges.get(name) else {
            anyhow::bail!("Bridge '{name}' not found");
        };
        println!("Bridge: {}{}", Style::value(name), marker(name));
        println!("  endpoint = {}", bridge.endpoint);
        println!("  path     = {}", bridge.prompt_path());
    } else {
        println!("{}\n", Style::header("Configured bridges:"));
        for name in config.sorted_bridge_names() {
            let bridge = &config.bridges[name];
            println!("  {}{}", Style::value(name), marker(name));
            println!(
                "    {}",
                Style::secondary(format!("{}{}", bridge.endpoint, bridge.prompt_path()))
            );
        }
    }

    Ok(())
}
