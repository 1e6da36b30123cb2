//! INI serialization logic for converting `ConfigFile` → INI string.

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let disable_at_zoom = config
        .cluster
        .disable_at_zoom
        .map(|z| z.to_string())
        .unwrap_or_default();

    format!(
        r#"[api]
; Root of the node REST API; layers are read from {{base_url}}/layers/
base_url = {}
; HTTP request timeout in seconds
timeout = {}

[map]
; Initial view
center_lat = {}
center_lon = {}
zoom = {}
; Base tile layer template ({{s}} subdomain, {{z}}/{{x}}/{{y}} tile)
tile_url = {}

[cluster]
; Markers closer than this many pixels are grouped
max_radius = {}
; Show every marker individually from this zoom upward (empty = never)
disable_at_zoom = {}

[logging]
file = {}
"#,
        config.api.base_url,
        config.api.timeout,
        config.map.center_lat,
        config.map.center_lon,
        config.map.zoom,
        config.map.tile_url,
        config.cluster.max_radius,
        disable_at_zoom,
        config.logging.file.display(),
    )
}
