use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::error::BridgeError;
use super::types::{LlmRequest, LlmResponse};

/// Where a bridge listens when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Path of the prompt endpoint on the bridge.
pub const DEFAULT_PATH: &str = "/llm";

/// Path of the bridge's health check.
pub const HEALTH_PATH: &str = "/health";

/// Something that can turn a prompt into a bridge response.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn submit(&self, prompt: &str) -> Result<LlmResponse, BridgeError>;
}

/// Connection settings for a [`BridgeClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Base URL of the bridge, e.g. `http://localhost:8080`.
    pub endpoint: String,
    /// Path of the prompt endpoint.
    pub path: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            path: DEFAULT_PATH.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for a bridge server.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    client: Client,
    endpoint: String,
    path: String,
}

impl BridgeClient {
    pub fn new(options: ClientOptions) -> Result<Self, BridgeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(BridgeError::Client)?;

        Ok(Self {
            client,
            endpoint: options.endpoint,
            path: options.path,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full URL of the prompt endpoint.
    pub fn prompt_url(&self) -> String {
        self.url(&self.path)
    }

    fn url(&self, path: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }

    /// Queries the bridge's health check and returns its body.
    pub async fn health(&self) -> Result<String, BridgeError> {
        let url = self.url(HEALTH_PATH);
        debug!(%url, "checking bridge health");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| BridgeError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| BridgeError::Connect { url, source })?;

        if !status.is_success() {
            return Err(BridgeError::status(status, &body));
        }

        Ok(body.trim().to_string())
    }
}

#[async_trait]
impl Backend for BridgeClient {
    async fn submit(&self, prompt: &str) -> Result<LlmResponse, BridgeError> {
        let url = self.prompt_url();
        debug!(%url, prompt_len = prompt.len(), "sending prompt");

        // `json` sets `Content-Type: application/json`
        let response = self
            .client
            .post(&url)
            .json(&LlmRequest { prompt })
            .send()
            .await
            .map_err(|source| BridgeError::Connect {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| BridgeError::Connect { url, source })?;

        if !status.is_success() {
            return Err(BridgeError::status(status, &body));
        }

        let parsed = LlmResponse::from_json(&body)?;
        debug!(
            actions = parsed.actions.as_ref().map(Vec::len),
            "bridge replied"
        );
        Ok(parsed)
    }
}
