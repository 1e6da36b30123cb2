//! Layer registry: layer name to clustering container.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cluster::ClusterGroup;

/// Mapping from layer name to its clustering container.
///
/// Inserting a name that is already present replaces the previous
/// container (last write wins).
#[derive(Debug, Clone, Default)]
pub struct LayerRegistry {
    layers: HashMap<String, Arc<ClusterGroup>>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a container, returning the one it replaced, if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        group: Arc<ClusterGroup>,
    ) -> Option<Arc<ClusterGroup>> {
        self.layers.insert(name.into(), group)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ClusterGroup>> {
        self.layers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layer names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<ClusterGroup>)> {
        self.layers.iter().map(|(k, v)| (k.as_str(), v))
    }
}
