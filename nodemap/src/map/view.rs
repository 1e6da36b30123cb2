//! Map viewport.

use serde::Serialize;

use crate::coord::{validate_zoom, CoordError, LatLng};

/// Default view center (Rome).
pub const DEFAULT_CENTER: LatLng = LatLng::new(41.87, 12.49);

/// Default view zoom.
pub const DEFAULT_ZOOM: u8 = 9;

/// Center and zoom of the visible map area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
}

impl MapView {
    /// Creates a validated view.
    pub fn new(center: LatLng, zoom: u8) -> Result<Self, CoordError> {
        let center = LatLng::checked(center.lat, center.lng)?;
        let zoom = validate_zoom(zoom)?;
        Ok(Self { center, zoom })
    }

    /// Moves the view; leaves it unchanged on invalid input.
    pub fn set_view(&mut self, center: LatLng, zoom: u8) -> Result<(), CoordError> {
        *self = Self::new(center, zoom)?;
        Ok(())
    }
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}
