//! Base tile layers.

use serde::Serialize;

/// OpenStreetMap tile URL template.
pub const OSM_TILE_URL: &str = "http://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Name of the fixed base layer entry in the layer control.
pub const OSM_LAYER_NAME: &str = "OpenStreetMap";

const DEFAULT_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// A raster tile source described by a URL template.
///
/// The template may contain `{s}` (subdomain), `{z}`, `{x}` and `{y}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileLayer {
    pub url_template: String,
    pub subdomains: Vec<String>,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            subdomains: DEFAULT_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn openstreetmap() -> Self {
        Self::new(OSM_TILE_URL)
    }

    /// Expands the template for one tile.
    ///
    /// The subdomain is picked by `(x + y) % subdomains.len()` so a given
    /// tile always maps to the same host.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (x as usize + y as usize) % self.subdomains.len();
            self.subdomains[index].as_str()
        };

        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::openstreetmap()
    }
}
