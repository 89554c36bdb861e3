use reqwest::StatusCode;
use thiserror::Error;

/// Longest slice of an error body kept in [`BridgeError::Status`].
const MAX_BODY_CHARS: usize = 200;

/// Failures of a single request to the bridge.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to reach bridge at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("bridge answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("unexpected response from bridge: {0}")]
    Decode(#[from] serde_json::Error),
}

impl BridgeError {
    pub(crate) fn status(status: StatusCode, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_BODY_CHARS) {
            Some((cut, _)) => format!("{}…", &body[..cut]),
            None => body.to_string(),
        };
        Self::Status { status, body }
    }

    /// Returns `true` for transport failures, including timeouts.
    pub const fn is_connect(&self) -> bool {
        matches!(self, Self::Connect { .. })
    }
}
