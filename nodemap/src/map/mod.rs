//! Map surface model
//!
//! The map widget, its base tile layer and the layer-selection control are
//! modeled as plain values so the load sequence can run and be inspected
//! without a browser:
//!
//! - [`MapWidget`]: view, base [`TileLayer`] and visible overlays
//! - [`MapSurface`]: the seam the layer loader writes overlays through
//! - [`LayerRegistry`]: layer name to clustering container
//! - [`LayerControl`]: base layers plus the registry as toggleable overlays

mod control;
mod registry;
mod surface;
mod tile;
mod view;

pub use control::LayerControl;
pub use registry::LayerRegistry;
pub use surface::{MapSurface, MapWidget, VisibleOverlay};
pub use tile::{TileLayer, OSM_LAYER_NAME, OSM_TILE_URL};
pub use view::{MapView, DEFAULT_CENTER, DEFAULT_ZOOM};

use thiserror::Error;

use crate::coord::CoordError;

/// Errors raised by map surface operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// No overlay is registered under this name.
    #[error("Unknown overlay layer: {0}")]
    UnknownOverlay(String),

    /// The requested view is outside the valid range.
    #[error("Invalid map view: {0}")]
    InvalidView(#[from] CoordError),
}
