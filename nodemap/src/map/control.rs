//! Layer-selection control.

use tracing::debug;

use super::registry::LayerRegistry;
use super::surface::MapSurface;
use super::tile::TileLayer;
use super::MapError;

/// Base layer radio buttons plus overlay checkboxes.
#[derive(Debug, Clone, Default)]
pub struct LayerControl {
    base_layers: Vec<(String, TileLayer)>,
    overlays: LayerRegistry,
}

impl LayerControl {
    pub fn new(base_layers: Vec<(String, TileLayer)>, overlays: LayerRegistry) -> Self {
        Self {
            base_layers,
            overlays,
        }
    }

    pub fn base_layers(&self) -> &[(String, TileLayer)] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &LayerRegistry {
        &self.overlays
    }

    /// Toggles the overlay registered under `name` on `surface`.
    pub fn set_overlay_visible<S: MapSurface>(
        &self,
        surface: &mut S,
        name: &str,
        visible: bool,
    ) -> Result<(), MapError> {
        let group = self
            .overlays
            .get(name)
            .ok_or_else(|| MapError::UnknownOverlay(name.to_string()))?;

        if visible {
            surface.add_overlay(name, std::sync::Arc::clone(group));
        } else {
            surface.remove_overlay(group);
        }
        debug!(layer = name, visible = visible, "Overlay visibility changed");
        Ok(())
    }

    /// Returns whether the overlay registered under `name` is visible.
    pub fn is_overlay_visible<S: MapSurface>(
        &self,
        surface: &S,
        name: &str,
    ) -> Result<bool, MapError> {
        self.overlays
            .get(name)
            .map(|group| surface.has_overlay(group))
            .ok_or_else(|| MapError::UnknownOverlay(name.to_string()))
    }
}
