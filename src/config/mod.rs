mod manager;

pub use manager::{
    BridgeConfig, ChatConfig, ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig,
    resolve_config,
};
