//! Application configuration for MapApplication.
//!
//! `AppConfig` combines everything needed to bootstrap the application:
//! API connection, initial view, base tile layer and clustering options.

use crate::api::{is_http_url, ApiConfig};
use crate::cluster::ClusterOptions;
use crate::config::ConfigFile;
use crate::map::{MapView, TileLayer};

use super::error::AppError;

/// Application configuration combining all component configs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppConfig {
    /// Node API connection settings.
    pub api: ApiConfig,

    /// Initial map view.
    pub view: MapView,

    /// Base tile layer shown under the overlays.
    pub base_layer: TileLayer,

    /// Clustering options applied to every layer.
    pub cluster: ClusterOptions,
}

impl AppConfig {
    /// Create a config with defaults and the given API base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig::new(base_url),
            ..Default::default()
        }
    }

    /// Create application config from the configuration file.
    ///
    /// Keeps the translation from file settings to component configs in
    /// one place rather than scattered in CLI code.
    pub fn from_config_file(config: &ConfigFile) -> Result<Self, AppError> {
        let view = config
            .map_view()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            api: config.api_config(),
            view,
            base_layer: config.tile_layer(),
            cluster: config.cluster_options(),
        })
    }

    /// Override the API base URL; it must be an `http://` or `https://` URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, AppError> {
        let base_url = base_url.into();
        if !is_http_url(&base_url) {
            return Err(AppError::Config(format!(
                "API base URL '{}' must start with http:// or https://",
                base_url
            )));
        }
        self.api.base_url = base_url;
        Ok(self)
    }

    /// Override the initial zoom.
    pub fn with_zoom(mut self, zoom: u8) -> Result<Self, AppError> {
        self.view = MapView::new(self.view.center, zoom).map_err(|e| AppError::Config(e.to_string()))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_new() {
        let config = AppConfig::new("http://nodes.example.org/api/v1");
        assert_eq!(config.api.base_url, "http://nodes.example.org/api/v1");
        assert_eq!(config.view.zoom, 9);
        assert_eq!(config.cluster, ClusterOptions::default());
    }

    #[test]
    fn test_from_config_file() {
        let mut file = ConfigFile::default();
        file.api.timeout = 7;
        file.map.zoom = 11;
        file.cluster.max_radius = 50.0;

        let config = AppConfig::from_config_file(&file).unwrap();
        assert_eq!(config.api.timeout_secs, 7);
        assert_eq!(config.view.zoom, 11);
        assert_eq!(config.cluster.max_cluster_radius, 50.0);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_base_url("http://h/api")
            .unwrap()
            .with_zoom(14)
            .unwrap();
        assert_eq!(config.api.base_url, "http://h/api");
        assert_eq!(config.view.zoom, 14);

        assert!(AppConfig::default().with_zoom(40).is_err());
        assert!(matches!(
            AppConfig::default().with_base_url("localhost:8000/api/v1"),
            Err(AppError::Config(_))
        ));
    }
}
