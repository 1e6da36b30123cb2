//! Map surface abstraction and the in-memory map widget.

use std::sync::Arc;

use tracing::debug;

use super::tile::TileLayer;
use super::view::MapView;
use crate::cluster::ClusterGroup;

/// The visible map that overlays are attached to.
///
/// Overlays are identified by container identity, not by name, so two
/// layers sharing a name can both be on the map.
pub trait MapSurface {
    /// Shows an overlay. Adding an overlay that is already visible is a no-op.
    fn add_overlay(&mut self, name: &str, group: Arc<ClusterGroup>);

    /// Hides an overlay; returns false if it was not visible.
    fn remove_overlay(&mut self, group: &Arc<ClusterGroup>) -> bool;

    /// Returns true if the overlay is currently visible.
    fn has_overlay(&self, group: &Arc<ClusterGroup>) -> bool;
}

/// A named overlay currently shown on a [`MapWidget`].
#[derive(Debug, Clone)]
pub struct VisibleOverlay {
    pub name: String,
    pub group: Arc<ClusterGroup>,
}

/// In-memory map widget: view, one base tile layer and visible overlays.
#[derive(Debug, Clone, Default)]
pub struct MapWidget {
    view: MapView,
    base_layer: TileLayer,
    overlays: Vec<VisibleOverlay>,
}

impl MapWidget {
    pub fn new(view: MapView, base_layer: TileLayer) -> Self {
        Self {
            view,
            base_layer,
            overlays: Vec::new(),
        }
    }

    pub fn view(&self) -> &MapView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MapView {
        &mut self.view
    }

    pub fn base_layer(&self) -> &TileLayer {
        &self.base_layer
    }

    /// Visible overlays in the order they were added.
    pub fn overlays(&self) -> &[VisibleOverlay] {
        &self.overlays
    }

    /// Removes every overlay; returns how many were removed.
    pub fn clear_overlays(&mut self) -> usize {
        let removed = self.overlays.len();
        self.overlays.clear();
        removed
    }
}

impl MapSurface for MapWidget {
    fn add_overlay(&mut self, name: &str, group: Arc<ClusterGroup>) {
        if self.has_overlay(&group) {
            return;
        }
        debug!(layer = name, markers = group.marker_count(), "Overlay added to map");
        self.overlays.push(VisibleOverlay {
            name: name.to_string(),
            group,
        });
    }

    fn remove_overlay(&mut self, group: &Arc<ClusterGroup>) -> bool {
        let before = self.overlays.len();
        self.overlays.retain(|o| !Arc::ptr_eq(&o.group, group));
        self.overlays.len() != before
    }

    fn has_overlay(&self, group: &Arc<ClusterGroup>) -> bool {
        self.overlays.iter().any(|o| Arc::ptr_eq(&o.group, group))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remove_overlay() {
        let mut widget = MapWidget::default();
        let group = Arc::new(ClusterGroup::default());

        widget.add_overlay("Roma", Arc::clone(&group));
        widget.add_overlay("Roma", Arc::clone(&group));
        assert_eq!(widget.overlays().len(), 1);
        assert!(widget.has_overlay(&group));

        assert!(widget.remove_overlay(&group));
        assert!(!widget.remove_overlay(&group));
        assert!(!widget.has_overlay(&group));
    }

    #[test]
    fn test_same_name_distinct_groups_both_visible() {
        let mut widget = MapWidget::default();
        widget.add_overlay("Roma", Arc::new(ClusterGroup::default()));
        widget.add_overlay("Roma", Arc::new(ClusterGroup::default()));

        assert_eq!(widget.overlays().len(), 2);
        assert_eq!(widget.clear_overlays(), 2);
        assert!(widget.overlays().is_empty());
    }
}
