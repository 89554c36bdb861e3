//! # bridge-chat - Terminal chat for IoT bridges
//!
//! `bridge-chat` talks to an IoT bridge server in plain language. Each prompt
//! is POSTed to the bridge's `/llm` endpoint; the bridge plans and runs calls
//! against its device API and reports them back as actions, which are shown
//! in a running transcript.
//!
//! ## Quick Start
//!
//! ```bash
//! # Interactive chat with the bridge on localhost:8080
//! bridge-chat
//!
//! # One prompt, then exit
//! bridge-chat send "turn on the kitchen lamp"
//!
//! # Is the bridge up?
//! bridge-chat health --endpoint http://pi.local:8080
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/bridge-chat/config.toml`:
//!
//! ```toml
//! [chat]
//! bridge = "home"
//! timeout_secs = 30
//!
//! [bridges.home]
//! endpoint = "http://localhost:8080"
//! path = "/llm"
//! ```

/// HTTP client for the bridge.
pub mod bridge;

/// Submission handler and interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and bridge settings.
pub mod config;

/// File system utilities.
pub mod fs;

/// Prompt input sources.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Chat transcript surfaces.
pub mod transcript;

/// Terminal UI components (spinner, colors).
pub mod ui;
