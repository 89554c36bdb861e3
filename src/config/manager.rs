use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::bridge::{ClientOptions, DEFAULT_ENDPOINT, DEFAULT_PATH};
use crate::fs::atomic_write;
use crate::paths;

/// Default settings in the `[chat]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Default bridge name.
    pub bridge: Option<String>,
    /// Request timeout in seconds. Unset or `0` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

/// Connection settings for one bridge server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Base URL of the bridge, e.g. `http://localhost:8080`.
    pub endpoint: String,
    /// Path of the prompt endpoint (defaults to `/llm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl BridgeConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            path: None,
        }
    }

    pub fn prompt_path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/bridge-chat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Bridge configurations keyed by name.
    #[serde(default)]
    pub bridges: HashMap<String, BridgeConfig>,
}

impl ConfigFile {
    /// Bridge names in alphabetical order.
    pub fn sorted_bridge_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bridges.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// The selected bridge name, if one was named.
    pub bridge_name: Option<String>,
    /// Base URL of the bridge.
    pub endpoint: String,
    /// Path of the prompt endpoint.
    pub path: String,
    /// Request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ResolvedConfig {
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            endpoint: self.endpoint.clone(),
            path: self.path.clone(),
            timeout: self.timeout,
        }
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Bridge name override.
    pub bridge: Option<String>,
    /// Endpoint override (CLI flag or `BRIDGE_CHAT_ENDPOINT`).
    pub endpoint: Option<String>,
    /// Timeout override in seconds.
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI options, then the selected bridge, then built-in defaults.
///
/// # Errors
///
/// Returns an error if the named bridge is not configured or the endpoint is
/// not an http(s) URL.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let bridge_name = options
        .bridge
        .as_ref()
        .or(config_file.chat.bridge.as_ref())
        .cloned();

    let bridge = match &bridge_name {
        Some(name) => Some(config_file.bridges.get(name).ok_or_else(|| {
            let available = config_file.sorted_bridge_names();
            if available.is_empty() {
                anyhow::anyhow!(
                    "Bridge '{name}' not found\n\n\
                     No bridges configured. Add bridges to ~/.config/bridge-chat/config.toml"
                )
            } else {
                anyhow::anyhow!(
                    "Bridge '{name}' not found\n\n\
                     Available bridges:\n  \
                     - {}\n\n\
                     Add bridges to ~/.config/bridge-chat/config.toml",
                    available.join("\n  - ")
                )
            }
        })?),
        None => None,
    };

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| bridge.map(|b| b.endpoint.clone()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!(
            "Invalid endpoint: '{endpoint}'\n\n\
             The endpoint must be an http:// or https:// URL, e.g. {DEFAULT_ENDPOINT}"
        );
    }

    let path = bridge.map_or(DEFAULT_PATH, BridgeConfig::prompt_path).to_string();

    let timeout = options
        .timeout_secs
        .or(config_file.chat.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    Ok(ResolvedConfig {
        bridge_name,
        endpoint,
        path,
        timeout,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/bridge-chat/config.toml`
    /// or `~/.config/bridge-chat/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, falling back to defaults when it is missing.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn create_test_config() -> ConfigFile {
        let mut bridges = HashMap::new();
        bridges.insert(
            "home".to_string(),
            BridgeConfig::new("http://localhost:8080"),
        );
        bridges.insert(
            "garage".to_string(),
            BridgeConfig {
                endpoint: "http://garage.local:9000".to_string(),
                path: Some("/api/llm".to_string()),
            },
        );

        ConfigFile {
            chat: ChatConfig {
                bridge: Some("home".to_string()),
                timeout_secs: Some(30),
            },
            bridges,
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let config = create_test_config();

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_parse_minimal_file() {
        let config: ConfigFile = toml::from_str(
            r#"
            [bridges.home]
            endpoint = "http://localhost:8080"
            "#,
        )
        .unwrap();

        assert!(config.chat.bridge.is_none());
        assert_eq!(config.bridges["home"].prompt_path(), "/llm");
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_rejects_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[chat\nbridge = ").unwrap();

        assert!(manager.load_or_default().is_err());
    }

    #[test]
    fn test_resolve_defaults_without_config() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.bridge_name, None);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.path, DEFAULT_PATH);
        assert_eq!(resolved.timeout, None);
    }

    #[test]
    fn test_resolve_uses_default_bridge() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.bridge_name.as_deref(), Some("home"));
        assert_eq!(resolved.endpoint, "http://localhost:8080");
        assert_eq!(resolved.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_resolve_named_bridge_with_custom_path() {
        let options = ResolveOptions {
            bridge: Some("garage".to_string()),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.endpoint, "http://garage.local:9000");
        assert_eq!(resolved.path, "/api/llm");
    }

    #[test]
    fn test_resolve_bridge_not_found_lists_available() {
        let options = ResolveOptions {
            bridge: Some("attic".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &create_test_config())
            .unwrap_err()
            .to_string();

        assert!(err.contains("not found"));
        assert!(err.contains("- garage\n  - home"));
    }

    #[test]
    fn test_resolve_rejects_non_http_endpoint() {
        let options = ResolveOptions {
            endpoint: Some("localhost:8080".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default())
            .unwrap_err()
            .to_string();
        assert!(err.contains("Invalid endpoint"));
    }

    #[test]
    fn test_resolve_zero_timeout_means_none() {
        let options = ResolveOptions {
            timeout_secs: Some(0),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();
        assert_eq!(resolved.timeout, None);
    }
}
