//! Layer descriptor returned by the layer list endpoint.

use serde::{Deserialize, Serialize};

/// Metadata identifying one toggleable map layer.
///
/// The API returns more fields than these (description, area, organization
/// and so on); they are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerDescriptor {
    /// Display name, used as the key in the layer registry.
    pub name: String,

    /// URL-safe identifier used to build the layer's GeoJSON endpoint.
    pub slug: String,
}

impl LayerDescriptor {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"[
            {"name": "Roma", "slug": "roma", "is_external": false, "nodes_count": 12},
            {"name": "Pisa", "slug": "pisa", "center": {"type": "Point", "coordinates": [10.4, 43.7]}}
        ]"#;

        let layers: Vec<LayerDescriptor> = serde_json::from_str(json).unwrap();
        assert_eq!(
            layers,
            vec![
                LayerDescriptor::new("Roma", "roma"),
                LayerDescriptor::new("Pisa", "pisa"),
            ]
        );
    }

    #[test]
    fn test_missing_slug_is_an_error() {
        let json = r#"[{"name": "Roma"}]"#;
        let result: Result<Vec<LayerDescriptor>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
