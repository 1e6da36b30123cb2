//! Application bootstrap and lifecycle management.
//!
//! This module provides [`MapApplication`], a single owning value for the
//! map widget, the layer registry and the layer control.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MapApplication                        │
//! │                                                           │
//! │  1. MapWidget ◄──── view + base TileLayer from AppConfig  │
//! │  2. LayerLoader ──► NodeApi ──► HttpClient                │
//! │        └── every ClusterGroup added to the widget         │
//! │  3. LayerControl ◄── "OpenStreetMap" + LayerRegistry      │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod bootstrap;
mod config;
mod error;
mod summary;

pub use bootstrap::MapApplication;
pub use config::AppConfig;
pub use error::AppError;
pub use summary::{AppSummary, BaseLayerSummary, LayerSummary};
