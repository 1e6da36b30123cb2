//! Layer loading
//!
//! [`LayerLoader`] runs the startup sequence once:
//!
//! 1. `GET {base}/layers/` for the layer descriptors
//! 2. for each descriptor in the order received, `GET {base}/layers/{slug}/geojson/`,
//!    build a [`ClusterGroup`], show it on the map surface and register it
//!    under the descriptor's name
//!
//! Fetches are sequential. The first failure aborts the load with
//! [`LoadError::LayerLoadFailed`], carrying the URL that failed; overlays
//! already shown stay on the surface and no registry is returned.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiConfig, ApiError, HttpClient, NodeApi};
use crate::cluster::{ClusterGroup, ClusterOptions};
use crate::map::{LayerRegistry, MapSurface};


/// Errors that can occur while loading layers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// A request failed or returned an unexpected body.
    #[error("Failed to load layer data from {url}: {source}")]
    LayerLoadFailed { url: String, source: ApiError },
}

impl LoadError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            LoadError::LayerLoadFailed { url, .. } => url,
        }
    }
}

/// Fetches layers and their nodes and wires them onto a map surface.
pub struct LayerLoader<C: HttpClient> {
    api: NodeApi<C>,
    cluster_options: ClusterOptions,
}

impl<C: HttpClient> LayerLoader<C> {
    /// Creates a loader for the API described by `config`.
    pub fn new(http_client: C, config: &ApiConfig) -> Self {
        Self {
            api: NodeApi::new(http_client, &config.base_url),
            cluster_options: ClusterOptions::default(),
        }
    }

    /// Sets the options used for every cluster group built by this loader.
    pub fn with_cluster_options(mut self, options: ClusterOptions) -> Self {
        self.cluster_options = options;
        self
    }

    /// Runs the load sequence.
    ///
    /// Every container is added to `surface` (visible) as soon as it is
    /// built. Returns the registry of all loaded layers keyed by name.
    pub async fn load<S: MapSurface>(&self, surface: &mut S) -> Result<LayerRegistry, LoadError> {
        let layers_url = self.api.layers_url();
        info!(url = %layers_url, "Fetching layer list");

        let descriptors = self
            .api
            .fetch_layers()
            .await
            .map_err(|source| LoadError::LayerLoadFailed {
                url: layers_url.clone(),
                source,
            })?;

        info!(count = descriptors.len(), "Layer list received");

        let mut registry = LayerRegistry::new();
        for descriptor in &descriptors {
            let url = self.api.geojson_url(&descriptor.slug);
            debug!(layer = %descriptor.name, slug = %descriptor.slug, url = %url, "Fetching layer nodes");

            let nodes = self
                .api
                .fetch_geojson(&descriptor.slug)
                .await
                .map_err(|source| {
                    warn!(layer = %descriptor.name, url = %url, error = %source, "Layer load failed");
                    LoadError::LayerLoadFailed {
                        url: url.clone(),
                        source,
                    }
                })?;

            let group = Arc::new(ClusterGroup::from_collection(&nodes, self.cluster_options));
            surface.add_overlay(&descriptor.name, Arc::clone(&group));

            debug!(
                layer = %descriptor.name,
                markers = group.marker_count(),
                shapes = group.shape_count(),
                "Layer loaded"
            );

            if registry.insert(descriptor.name.clone(), group).is_some() {
                warn!(layer = %descriptor.name, "Duplicate layer name, keeping the last one");
            }
        }

        info!(layers = registry.len(), "All layers loaded");
        Ok(registry)
    }
}
