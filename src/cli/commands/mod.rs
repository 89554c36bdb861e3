//! Subcommand implementations.

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Bridge listing command handler.
pub mod bridges;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Health check command handler.
pub mod health;

/// One-shot prompt command handler.
pub mod send;

/// Loads the config file and merges it with CLI overrides.
pub fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    resolve_config(options, &file_config)
}
