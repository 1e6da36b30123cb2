//! Coordinate conversion module
//!
//! Provides conversions between geographic coordinates (latitude/longitude)
//! and Web Mercator world pixel coordinates. Marker clustering measures
//! distances in pixel space so that cluster radii stay constant on screen
//! regardless of zoom level.

mod types;

pub use types::{
    CoordError, LatLng, LatLngBounds, PixelPoint, MAX_LAT, MAX_LON, MAX_ZOOM, MIN_LAT, MIN_LON,
    TILE_SIZE,
};

use std::f64::consts::PI;

/// Width (and height) of the whole world in pixels at `zoom`.
#[inline]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * 2.0_f64.powi(zoom as i32)
}

/// Projects a geographic position into world pixel space.
///
/// Latitudes beyond the Web Mercator limits are clamped, so features at the
/// poles still project onto the top or bottom edge instead of failing.
#[inline]
pub fn project(position: &LatLng, zoom: u8) -> PixelPoint {
    let size = world_size(zoom);
    let lat = position.lat.clamp(MIN_LAT, MAX_LAT);

    let x = (position.lng + 180.0) / 360.0 * size;

    let lat_rad = lat * PI / 180.0;
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * size;

    PixelPoint { x, y }
}

/// Validates a zoom level for use in a map view.
pub fn validate_zoom(zoom: u8) -> Result<u8, CoordError> {
    if zoom > MAX_ZOOM {
        return Err(CoordError::InvalidZoom(zoom));
    }
    Ok(zoom)
}
