//! Configuration key access and validation.
//!
//! Provides a type-safe interface for getting and setting configuration
//! values by `section.key` name.

use std::str::FromStr;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    // API settings
    ApiBaseUrl,
    ApiTimeout,

    // Map settings
    MapCenterLat,
    MapCenterLon,
    MapZoom,
    MapTileUrl,

    // Cluster settings
    ClusterMaxRadius,
    ClusterDisableAtZoom,

    // Logging settings
    LoggingFile,
}

const ALL_KEYS: &[ConfigKey] = &[
    ConfigKey::ApiBaseUrl,
    ConfigKey::ApiTimeout,
    ConfigKey::MapCenterLat,
    ConfigKey::MapCenterLon,
    ConfigKey::MapZoom,
    ConfigKey::MapTileUrl,
    ConfigKey::ClusterMaxRadius,
    ConfigKey::ClusterDisableAtZoom,
    ConfigKey::LoggingFile,
];

impl FromStr for ConfigKey {
    type Err = ConfigFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ALL_KEYS
            .iter()
            .copied()
            .find(|k| k.name() == wanted)
            .ok_or_else(|| ConfigFileError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// All keys, grouped by section.
    pub fn all() -> &'static [ConfigKey] {
        ALL_KEYS
    }

    /// Get the canonical key name (e.g., "api.base_url").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ApiBaseUrl => "api.base_url",
            ConfigKey::ApiTimeout => "api.timeout",
            ConfigKey::MapCenterLat => "map.center_lat",
            ConfigKey::MapCenterLon => "map.center_lon",
            ConfigKey::MapZoom => "map.zoom",
            ConfigKey::MapTileUrl => "map.tile_url",
            ConfigKey::ClusterMaxRadius => "cluster.max_radius",
            ConfigKey::ClusterDisableAtZoom => "cluster.disable_at_zoom",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "api").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "base_url").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ApiBaseUrl => config.api.base_url.clone(),
            ConfigKey::ApiTimeout => config.api.timeout.to_string(),
            ConfigKey::MapCenterLat => config.map.center_lat.to_string(),
            ConfigKey::MapCenterLon => config.map.center_lon.to_string(),
            ConfigKey::MapZoom => config.map.zoom.to_string(),
            ConfigKey::MapTileUrl => config.map.tile_url.clone(),
            ConfigKey::ClusterMaxRadius => config.cluster.max_radius.to_string(),
            ConfigKey::ClusterDisableAtZoom => config
                .cluster
                .disable_at_zoom
                .map(|z| z.to_string())
                .unwrap_or_default(),
            ConfigKey::LoggingFile => config.logging.file.display().to_string(),
        }
    }

    /// Validate and set the value in a config file.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigFileError> {
        super::parser::apply_value(config, *self, value)
    }
}
