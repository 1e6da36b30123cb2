//! Serializable snapshot of a running application.

use serde::Serialize;

use crate::coord::LatLngBounds;
use crate::map::MapView;

/// State of the map and its layers at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppSummary {
    pub view: MapView,
    pub base_layers: Vec<BaseLayerSummary>,
    /// Overlay layers sorted by name.
    pub layers: Vec<LayerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseLayerSummary {
    pub name: String,
    pub url_template: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerSummary {
    pub name: String,
    pub markers: usize,
    pub shapes: usize,
    /// Cluster count at the view's zoom.
    pub clusters: usize,
    pub visible: bool,
    pub bounds: Option<LatLngBounds>,
}

impl AppSummary {
    pub fn total_markers(&self) -> usize {
        self.layers.iter().map(|l| l.markers).sum()
    }
}
