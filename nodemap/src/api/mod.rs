//! Node API access
//!
//! This module provides the HTTP abstraction and the typed endpoint client
//! used by the layer loader.
//!
//! ```ignore
//! use nodemap::api::{NodeApi, ReqwestClient};
//!
//! let http_client = ReqwestClient::with_timeout(30)?;
//! let api = NodeApi::new(http_client, "http://localhost:8000/api/v1");
//! let layers = api.fetch_layers().await?;
//! ```

mod client;
mod http;
mod types;

pub use client::NodeApi;
pub use http::{HttpClient, ReqwestClient};
pub use types::{is_http_url, ApiConfig, ApiError, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[cfg(test)]
pub use http::tests::MockHttpClient;
