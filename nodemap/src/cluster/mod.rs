//! Marker clustering
//!
//! A [`ClusterGroup`] is the clustering container of one map layer: it is
//! populated from the layer's GeoJSON nodes and groups nearby markers into
//! [`Cluster`]s for a given zoom level. Distances are measured in Web
//! Mercator pixel space, so a cluster covers the same on-screen area at
//! every zoom.

mod group;
mod marker;

pub use group::{ClusterGroup, ClusterOptions, DEFAULT_MAX_CLUSTER_RADIUS};
pub use marker::{Cluster, Marker, Shape};
