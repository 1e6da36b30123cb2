//! Configuration settings structs and their defaults.

use std::path::PathBuf;

use crate::api::{ApiConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::cluster::{ClusterOptions, DEFAULT_MAX_CLUSTER_RADIUS};
use crate::coord::{CoordError, LatLng};
use crate::map::{MapView, TileLayer, DEFAULT_CENTER, DEFAULT_ZOOM, OSM_TILE_URL};

/// Contents of `config.ini`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub api: ApiSettings,
    pub map: MapSettings,
    pub cluster: ClusterSettings,
    pub logging: LoggingSettings,
}

/// `[api]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// `[map]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub tile_url: String,
}

/// `[cluster]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSettings {
    pub max_radius: f64,
    pub disable_at_zoom: Option<u8>,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    pub file: PathBuf,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER.lat,
            center_lon: DEFAULT_CENTER.lng,
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL.to_string(),
        }
    }
}

impl Default for ClusterSettings {
    fn default() -> Self {
        Self {
            max_radius: DEFAULT_MAX_CLUSTER_RADIUS,
            disable_at_zoom: None,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file: super::file::default_log_file(),
        }
    }
}

impl ConfigFile {
    /// API connection settings.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.api.base_url.clone()).with_timeout_secs(self.api.timeout)
    }

    /// Initial map view.
    pub fn map_view(&self) -> Result<MapView, CoordError> {
        MapView::new(
            LatLng::new(self.map.center_lat, self.map.center_lon),
            self.map.zoom,
        )
    }

    /// Base tile layer.
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer::new(self.map.tile_url.clone())
    }

    /// Options for every layer's cluster group.
    pub fn cluster_options(&self) -> ClusterOptions {
        ClusterOptions {
            max_cluster_radius: self.cluster.max_radius,
            disable_clustering_at_zoom: self.cluster.disable_at_zoom,
        }
    }
}
