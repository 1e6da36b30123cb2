//! NodeMap - clustered node layers for web maps
//!
//! This library loads the layers published by a node database REST API,
//! fetches each layer's GeoJSON node collection, groups the nodes into
//! clustering containers and registers them with a map surface and a
//! layer-selection control.
//!
//! # Load sequence
//!
//! ```text
//! GET {base}/layers/                 -> [LayerDescriptor]
//! for each descriptor, in order:
//!   GET {base}/layers/{slug}/geojson/ -> FeatureCollection
//!   ClusterGroup::from_collection     -> added to the map, visible
//!   registry[descriptor.name] = group
//! LayerControl { "OpenStreetMap" base, registry overlays }
//! ```
//!
//! The entry point for applications is [`app::MapApplication`].

pub mod api;
pub mod app;
pub mod cluster;
pub mod config;
pub mod coord;
pub mod geojson;
pub mod loader;
pub mod logging;
pub mod map;
