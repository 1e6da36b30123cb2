//! GeoJSON geometry, feature and feature collection types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::coord::LatLng;

/// A GeoJSON position: `[longitude, latitude]` with optional altitude.
///
/// Arrays with fewer than two numbers are rejected during deserialization,
/// so a malformed node surfaces as a decode error rather than a marker at
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Position {
    pub lng: f64,
    pub lat: f64,
    pub alt: Option<f64>,
}

impl Position {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat, alt: None }
    }

    pub fn to_lat_lng(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

impl TryFrom<Vec<f64>> for Position {
    type Error = String;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        match values.as_slice() {
            [lng, lat] => Ok(Self::new(*lng, *lat)),
            [lng, lat, alt, ..] => Ok(Self {
                lng: *lng,
                lat: *lat,
                alt: Some(*alt),
            }),
            _ => Err(format!(
                "position needs at least 2 coordinates, got {}",
                values.len()
            )),
        }
    }
}

impl From<Position> for Vec<f64> {
    fn from(p: Position) -> Self {
        match p.alt {
            Some(alt) => vec![p.lng, p.lat, alt],
            None => vec![p.lng, p.lat],
        }
    }
}

/// A GeoJSON geometry object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    /// Calls `f` for every position in the geometry, depth first.
    pub fn for_each_position<F: FnMut(&Position)>(&self, f: &mut F) {
        match self {
            Geometry::Point { coordinates } => f(coordinates),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                coordinates.iter().for_each(|p| f(p))
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                coordinates.iter().flatten().for_each(|p| f(p))
            }
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().flatten().flatten().for_each(|p| f(p))
            }
            Geometry::GeometryCollection { geometries } => {
                for g in geometries {
                    g.for_each_position(f);
                }
            }
        }
    }
}

/// A GeoJSON feature: optional geometry plus free-form properties.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl Feature {
    /// Returns a string property, if present and a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(Value::as_str)
    }

    /// Popup label for markers created from this feature.
    ///
    /// Uses the `name` property, falling back to `slug`.
    pub fn label(&self) -> Option<&str> {
        self.property_str("name").or_else(|| self.property_str("slug"))
    }
}

/// A GeoJSON feature collection; the payload of one layer's node endpoint.
///
/// Decoding accepts any GeoJSON object the way a map layer would draw it:
/// a `FeatureCollection`, a single `Feature`, or a bare geometry, the last
/// two becoming a one-feature collection. Anything without a GeoJSON
/// `type` member, such as an API error object, is rejected.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Deserialize)]
struct CollectionBody {
    features: Vec<Feature>,
}

impl TryFrom<Value> for FeatureCollection {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| "expected a GeoJSON object with a string \"type\" member".to_string())?;

        let features = match kind.as_str() {
            "FeatureCollection" => {
                serde_json::from_value::<CollectionBody>(value)
                    .map_err(|e| format!("invalid FeatureCollection: {}", e))?
                    .features
            }
            "Feature" => vec![serde_json::from_value::<Feature>(value)
                .map_err(|e| format!("invalid Feature: {}", e))?],
            _ => {
                let geometry = serde_json::from_value::<Geometry>(value)
                    .map_err(|e| format!("invalid GeoJSON object: {}", e))?;
                vec![Feature {
                    geometry: Some(geometry),
                    ..Default::default()
                }]
            }
        };

        Ok(Self { features })
    }
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
