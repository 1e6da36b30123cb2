//! Markers, shapes and clusters held by a cluster group.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coord::{LatLng, LatLngBounds};
use crate::geojson::Geometry;

/// A single node marker derived from a point feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLng,

    /// Popup text, from the feature's `name` or `slug` property.
    pub label: Option<String>,

    pub properties: Map<String, Value>,
}

/// A non-point feature (link, area) kept alongside the markers.
///
/// Shapes are drawn as-is and never take part in clustering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub geometry: Geometry,
    pub label: Option<String>,
}

/// A group of markers that render as one cluster icon at some zoom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    /// Mean position of the members.
    pub center: LatLng,

    /// Extent of the members.
    pub bounds: LatLngBounds,

    /// Indices into the owning group's marker list.
    pub members: Vec<usize>,
}

impl Cluster {
    /// Number of markers in the cluster.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// True when the cluster would render as a plain marker.
    pub fn is_single(&self) -> bool {
        self.members.len() == 1
    }
}
