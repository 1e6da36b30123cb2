//! Marker clustering container.

use tracing::trace;

use super::marker::{Cluster, Marker, Shape};
use crate::coord::{project, LatLng, LatLngBounds, PixelPoint};
use crate::geojson::{Feature, FeatureCollection, Geometry};

/// Default cluster radius in screen pixels.
pub const DEFAULT_MAX_CLUSTER_RADIUS: f64 = 80.0;

/// Tuning for how markers are grouped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterOptions {
    /// Maximum distance, in pixels at the evaluated zoom, between a cluster's
    /// anchor and a marker joining it.
    pub max_cluster_radius: f64,

    /// From this zoom upward every marker is shown individually.
    pub disable_clustering_at_zoom: Option<u8>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            max_cluster_radius: DEFAULT_MAX_CLUSTER_RADIUS,
            disable_clustering_at_zoom: None,
        }
    }
}

/// Clustering container for one map layer.
///
/// Holds the markers built from a layer's point features plus any non-point
/// shapes. Clusters are computed on demand for a zoom level.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterGroup {
    options: ClusterOptions,
    markers: Vec<Marker>,
    shapes: Vec<Shape>,
}

impl ClusterGroup {
    /// Creates an empty group.
    pub fn new(options: ClusterOptions) -> Self {
        Self {
            options,
            markers: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Creates a group populated from a node collection.
    pub fn from_collection(collection: &FeatureCollection, options: ClusterOptions) -> Self {
        let mut group = Self::new(options);
        group.add_collection(collection);
        group
    }

    /// Adds every feature of `collection` to the group.
    ///
    /// `Point` features become one marker, `MultiPoint` features one marker
    /// per position, other geometries become shapes. Features without a
    /// geometry are skipped. Returns the number of features used.
    pub fn add_collection(&mut self, collection: &FeatureCollection) -> usize {
        let before = (self.markers.len(), self.shapes.len());
        let used = collection
            .features
            .iter()
            .filter(|f| self.add_feature(f))
            .count();

        trace!(
            features = collection.len(),
            used = used,
            markers_added = self.markers.len() - before.0,
            shapes_added = self.shapes.len() - before.1,
            "Populated cluster group"
        );
        used
    }

    /// Adds one feature; returns false if it had no geometry.
    pub fn add_feature(&mut self, feature: &Feature) -> bool {
        let Some(geometry) = &feature.geometry else {
            return false;
        };
        let label = feature.label().map(str::to_string);
        let properties = feature.properties.clone().unwrap_or_default();

        match geometry {
            Geometry::Point { coordinates } => {
                self.markers.push(Marker {
                    position: coordinates.to_lat_lng(),
                    label,
                    properties,
                });
            }
            Geometry::MultiPoint { coordinates } => {
                for position in coordinates {
                    self.markers.push(Marker {
                        position: position.to_lat_lng(),
                        label: label.clone(),
                        properties: properties.clone(),
                    });
                }
            }
            other => self.shapes.push(Shape {
                geometry: other.clone(),
                label,
            }),
        }
        true
    }

    pub fn options(&self) -> &ClusterOptions {
        &self.options
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.shapes.is_empty()
    }

    /// Extent of all markers and shapes, or `None` for an empty group.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        let mut include = |p: LatLng| match bounds.as_mut() {
            Some(b) => b.extend(p),
            None => bounds = Some(LatLngBounds::from_point(p)),
        };

        for marker in &self.markers {
            include(marker.position);
        }
        for shape in &self.shapes {
            shape
                .geometry
                .for_each_position(&mut |p| include(p.to_lat_lng()));
        }
        bounds
    }

    /// Groups markers into clusters for display at `zoom`.
    ///
    /// Markers are visited in insertion order. Each joins the first cluster
    /// whose anchor (its first member) is within `max_cluster_radius`
    /// pixels, or starts a new one. Every marker belongs to exactly one
    /// cluster.
    pub fn clusters(&self, zoom: u8) -> Vec<Cluster> {
        let clustering_disabled = self
            .options
            .disable_clustering_at_zoom
            .is_some_and(|z| zoom >= z);

        let mut anchors: Vec<PixelPoint> = Vec::new();
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for (index, marker) in self.markers.iter().enumerate() {
            let point = project(&marker.position, zoom);

            let target = if clustering_disabled {
                None
            } else {
                anchors
                    .iter()
                    .position(|a| a.distance_to(&point) <= self.options.max_cluster_radius)
            };

            match target {
                Some(i) => groups[i].push(index),
                None => {
                    anchors.push(point);
                    groups.push(vec![index]);
                }
            }
        }

        groups
            .into_iter()
            .map(|members| self.build_cluster(members))
            .collect()
    }

    fn build_cluster(&self, members: Vec<usize>) -> Cluster {
        let first = self.markers[members[0]].position;
        let mut bounds = LatLngBounds::from_point(first);
        let (mut lat_sum, mut lng_sum) = (0.0, 0.0);

        for &i in &members {
            let p = self.markers[i].position;
            bounds.extend(p);
            lat_sum += p.lat;
            lng_sum += p.lng;
        }

        let n = members.len() as f64;
        Cluster {
            center: LatLng::new(lat_sum / n, lng_sum / n),
            bounds,
            members,
        }
    }
}
