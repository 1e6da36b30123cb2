//! Configuration file support
//!
//! User settings live in `~/.nodemap/config.ini`:
//!
//! ```ini
//! [api]
//! base_url = http://localhost:8000/api/v1
//! timeout = 30
//!
//! [map]
//! center_lat = 41.87
//! center_lon = 12.49
//! zoom = 9
//! tile_url = http://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png
//!
//! [cluster]
//! max_radius = 80
//! disable_at_zoom =
//! ```

mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use file::{config_directory, config_file_path, default_log_file, ConfigFileError};
pub use keys::ConfigKey;
pub use settings::{ApiSettings, ClusterSettings, ConfigFile, LoggingSettings, MapSettings};
