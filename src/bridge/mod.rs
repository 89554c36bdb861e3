//! HTTP client for the bridge's prompt and health endpoints.

mod client;
mod error;
mod types;

pub use client::{
    Backend, BridgeClient, ClientOptions, DEFAULT_ENDPOINT, DEFAULT_PATH, HEALTH_PATH,
};
pub use error::BridgeError;
pub use types::{Action, LlmRequest, LlmResponse};
