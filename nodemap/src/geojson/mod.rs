//! Typed model of the node API payloads.
//!
//! - [`LayerDescriptor`]: one entry of `GET {base}/layers/`
//! - [`FeatureCollection`]: the body of `GET {base}/layers/{slug}/geojson/`

mod descriptor;
mod geometry;

pub use descriptor::LayerDescriptor;
pub use geometry::{Feature, FeatureCollection, Geometry, Position};
