//! API error and configuration types.

use thiserror::Error;

/// Default node API base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur while talking to the node API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The body was not the JSON shape expected for this endpoint.
    #[error("Invalid response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

/// True when `url` uses the `http` or `https` scheme.
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Connection settings for the node API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL; endpoint paths are appended to it.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
