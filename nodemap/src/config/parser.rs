//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct
//! fields; `config set` goes through [`apply_value`] as well.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::keys::ConfigKey;
use super::settings::ConfigFile;
use crate::api::is_http_url;
use crate::coord::{MAX_LAT, MAX_LON, MAX_ZOOM};

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the
/// INI. Unknown sections and keys are ignored.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    for key in ConfigKey::all() {
        let value = ini
            .section(Some(key.section()))
            .and_then(|section| section.get(key.key_name()));

        if let Some(v) = value {
            apply_value(&mut config, *key, v)?;
        }
    }

    Ok(config)
}

/// Validate `value` and store it in the field behind `key`.
pub(super) fn apply_value(
    config: &mut ConfigFile,
    key: ConfigKey,
    value: &str,
) -> Result<(), ConfigFileError> {
    let v = value.trim();
    let invalid = |reason: &str| ConfigFileError::InvalidValue {
        section: key.section().to_string(),
        key: key.key_name().to_string(),
        value: v.to_string(),
        reason: reason.to_string(),
    };

    match key {
        ConfigKey::ApiBaseUrl => {
            if !is_http_url(v) {
                return Err(invalid("must start with http:// or https://"));
            }
            config.api.base_url = v.to_string();
        }
        ConfigKey::ApiTimeout => {
            config.api.timeout = v
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| invalid("expected a positive number of seconds"))?;
        }
        ConfigKey::MapCenterLat => {
            config.map.center_lat = v
                .parse::<f64>()
                .ok()
                .filter(|lat| lat.abs() <= MAX_LAT)
                .ok_or_else(|| invalid("expected a latitude within ±85.05"))?;
        }
        ConfigKey::MapCenterLon => {
            config.map.center_lon = v
                .parse::<f64>()
                .ok()
                .filter(|lon| lon.abs() <= MAX_LON)
                .ok_or_else(|| invalid("expected a longitude within ±180"))?;
        }
        ConfigKey::MapZoom => {
            config.map.zoom = parse_zoom(v).ok_or_else(|| invalid("expected a zoom from 0 to 18"))?;
        }
        ConfigKey::MapTileUrl => {
            if !["{z}", "{x}", "{y}"].iter().all(|p| v.contains(p)) {
                return Err(invalid("template must contain {z}, {x} and {y}"));
            }
            config.map.tile_url = v.to_string();
        }
        ConfigKey::ClusterMaxRadius => {
            config.cluster.max_radius = v
                .parse::<f64>()
                .ok()
                .filter(|r| r.is_finite() && *r > 0.0)
                .ok_or_else(|| invalid("expected a positive number of pixels"))?;
        }
        ConfigKey::ClusterDisableAtZoom => {
            config.cluster.disable_at_zoom = if v.is_empty() {
                None
            } else {
                Some(parse_zoom(v).ok_or_else(|| invalid("expected a zoom from 0 to 18 or empty"))?)
            };
        }
        ConfigKey::LoggingFile => {
            if v.is_empty() {
                return Err(invalid("path must not be empty"));
            }
            config.logging.file = expand_tilde(v);
        }
    }

    Ok(())
}

fn parse_zoom(value: &str) -> Option<u8> {
    value.parse::<u8>().ok().filter(|z| *z <= MAX_ZOOM)
}

/// Expand a leading `~` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let ini = Ini::load_from_str(content).unwrap();
        parse_ini(&ini)
    }

    #[test]
    fn test_partial_config() {
        let config = parse("[api]\nbase_url = https://nodes.example.org/api/v1\n").unwrap();

        assert_eq!(config.api.base_url, "https://nodes.example.org/api/v1");
        assert_eq!(config.api.timeout, 30);
        assert_eq!(config.map.zoom, 9);
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            "[api]\nbase_url = http://h/api\ntimeout = 5\n\
             [map]\ncenter_lat = 43.72\ncenter_lon = 10.40\nzoom = 12\n\
             [cluster]\nmax_radius = 40\ndisable_at_zoom = 15\n",
        )
        .unwrap();

        assert_eq!(config.api.timeout, 5);
        assert_eq!(config.map.center_lat, 43.72);
        assert_eq!(config.map.center_lon, 10.40);
        assert_eq!(config.map.zoom, 12);
        assert_eq!(config.cluster.max_radius, 40.0);
        assert_eq!(config.cluster.disable_at_zoom, Some(15));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = parse("[api]\nbase_url = localhost:8000\n");
        assert!(matches!(
            result,
            Err(ConfigFileError::InvalidValue { ref key, .. }) if key == "base_url"
        ));
    }

    #[test]
    fn test_invalid_zoom() {
        assert!(parse("[map]\nzoom = 25\n").is_err());
        assert!(parse("[map]\nzoom = abc\n").is_err());
    }

    #[test]
    fn test_empty_disable_at_zoom_is_none() {
        let config = parse("[cluster]\ndisable_at_zoom =\n").unwrap();
        assert_eq!(config.cluster.disable_at_zoom, None);
    }

    #[test]
    fn test_tile_url_requires_placeholders() {
        assert!(parse("[map]\ntile_url = http://tiles.example.org/tile.png\n").is_err());
        assert!(parse("[map]\ntile_url = http://tiles.example.org/{z}/{x}/{y}.png\n").is_ok());
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/logs/nodemap.log");
        assert!(!expanded.starts_with("~"));
        assert_eq!(expand_tilde("/var/log/x.log"), PathBuf::from("/var/log/x.log"));
    }
}
