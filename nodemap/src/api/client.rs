//! Typed client for the node API endpoints.

use serde::de::DeserializeOwned;
use tracing::debug;

use super::http::HttpClient;
use super::types::ApiError;
use crate::geojson::{FeatureCollection, LayerDescriptor};

/// Client for the two endpoints the layer loader consumes.
///
/// # URL Pattern
///
/// - `{base}/layers/`
/// - `{base}/layers/{slug}/geojson/`
///
/// A trailing `/` on the base URL is ignored. Slugs are inserted verbatim.
pub struct NodeApi<C: HttpClient> {
    http_client: C,
    base_url: String,
}

impl<C: HttpClient> NodeApi<C> {
    /// Creates a new API client.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `base_url` - API root, e.g. `http://localhost:8000/api/v1`
    pub fn new(http_client: C, base_url: &str) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the layer list endpoint.
    pub fn layers_url(&self) -> String {
        format!("{}/layers/", self.base_url)
    }

    /// URL of one layer's GeoJSON endpoint.
    pub fn geojson_url(&self, slug: &str) -> String {
        format!("{}/layers/{}/geojson/", self.base_url, slug)
    }

    /// Fetches the list of layer descriptors.
    pub async fn fetch_layers(&self) -> Result<Vec<LayerDescriptor>, ApiError> {
        self.get_json(&self.layers_url()).await
    }

    /// Fetches the node collection of the layer identified by `slug`.
    pub async fn fetch_geojson(&self, slug: &str) -> Result<FeatureCollection, ApiError> {
        self.get_json(&self.geojson_url(slug)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.http_client.get(url).await?;
        debug!(url = url, bytes = body.len(), "Decoding JSON response");

        serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
