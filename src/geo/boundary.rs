//! Boundary dataset parsing.
//!
//! Converts raw GeoJSON text into typed boundary features. Only area
//! geometries (Polygon and MultiPolygon) are kept; anything else is
//! dropped with a warning rather than aborting the whole dataset.

use geo_types::Coord;
use geojson::{Feature, GeoJson, Value};
use log::warn;

/// Validated outline geometry for a single boundary feature.
///
/// Rings are stored as parsed: the first ring of each polygon is the
/// exterior, the rest are holes. Winding order is preserved from the
/// source document.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    /// A single polygon as a list of rings.
    Polygon(Vec<Vec<Coord<f64>>>),
    /// Multiple disjoint polygons, each a list of rings.
    MultiPolygon(Vec<Vec<Vec<Coord<f64>>>>),
}

impl Outline {
    /// Iterates over every ring regardless of polygon nesting.
    pub fn rings(&self) -> impl Iterator<Item = &Vec<Coord<f64>>> {
        let rings: Vec<&Vec<Coord<f64>>> = match self {
            Outline::Polygon(rings) => rings.iter().collect(),
            Outline::MultiPolygon(polygons) => polygons.iter().flatten().collect(),
        };
        rings.into_iter()
    }
}

/// A single named boundary (the country outline or one state).
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryFeature {
    /// Stable identifier from the source document, if present.
    pub id: Option<String>,
    /// Display name from the `name` (or legacy `NAME`) property.
    pub name: Option<String>,
    /// The feature's outline geometry.
    pub outline: Outline,
}

/// An ordered collection of boundary features.
///
/// Feature order matches the source document; downstream rendering
/// relies on that order for draw stacking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryDataset {
    pub features: Vec<BoundaryFeature>,
}

/// Errors produced while parsing a boundary document.
#[derive(Debug, Clone)]
pub enum ParseError {
    /// The text was not valid JSON or not valid GeoJSON.
    InvalidJson(String),
    /// The document parsed but was not a FeatureCollection.
    NotACollection,
    /// The document had no usable `features` array.
    MissingFeatures,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidJson(msg) => write!(f, "Invalid boundary document: {}", msg),
            ParseError::NotACollection => {
                write!(f, "Boundary document is not a feature collection")
            }
            ParseError::MissingFeatures => {
                write!(f, "Boundary document has no features array")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl BoundaryDataset {
    /// Parses a GeoJSON FeatureCollection into a boundary dataset.
    ///
    /// Structural problems (bad JSON, wrong document type, missing
    /// `features` array) fail the whole parse. Individual features with
    /// unusable geometry are skipped with a warning so one bad state
    /// cannot take down the rest of the map.
    pub fn from_geojson(text: &str) -> Result<Self, ParseError> {
        // Check the document shape before the typed parse so a missing
        // features array reports as such instead of a serde error.
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ParseError::InvalidJson(e.to_string()))?;
        let object = value.as_object().ok_or(ParseError::NotACollection)?;
        match object.get("features") {
            Some(features) if features.is_array() => {}
            _ => return Err(ParseError::MissingFeatures),
        }

        let geojson: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| ParseError::InvalidJson(e.to_string()))?;

        let fc = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(ParseError::NotACollection),
        };

        let mut features = Vec::with_capacity(fc.features.len());
        for (index, feature) in fc.features.iter().enumerate() {
            match convert_feature(feature) {
                Some(boundary) => features.push(boundary),
                None => warn!("Skipping boundary feature {} with unusable geometry", index),
            }
        }

        Ok(Self { features })
    }

    /// Number of features in the dataset.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the dataset holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn convert_feature(feature: &Feature) -> Option<BoundaryFeature> {
    let name = feature
        .properties
        .as_ref()
        .and_then(|p| p.get("name").or_else(|| p.get("NAME")))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let id = feature.id.as_ref().map(|id| match id {
        geojson::feature::Id::String(s) => s.clone(),
        geojson::feature::Id::Number(n) => n.to_string(),
    });

    let geometry = feature.geometry.as_ref()?;
    let outline = match &geometry.value {
        Value::Polygon(rings) => Outline::Polygon(convert_rings(rings)?),
        Value::MultiPolygon(polygons) => {
            let converted: Option<Vec<_>> = polygons.iter().map(|p| convert_rings(p)).collect();
            Outline::MultiPolygon(converted?)
        }
        _ => return None,
    };

    Some(BoundaryFeature { id, name, outline })
}

fn convert_rings(rings: &[Vec<Vec<f64>>]) -> Option<Vec<Vec<Coord<f64>>>> {
    if rings.is_empty() {
        return None;
    }
    rings.iter().map(|ring| convert_ring(ring)).collect()
}

fn convert_ring(ring: &[Vec<f64>]) -> Option<Vec<Coord<f64>>> {
    ring.iter()
        .map(|position| match (position.first(), position.get(1)) {
            (Some(&x), Some(&y)) => Some(Coord { x, y }),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon_feature(name: &str, ring: &str) -> String {
        format!(
            r#"{{"type":"Feature","properties":{{"name":"{}"}},"geometry":{{"type":"Polygon","coordinates":[{}]}}}}"#,
            name, ring
        )
    }

    fn collection(features: &[String]) -> String {
        format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        )
    }

    const SQUARE: &str = "[[0.0,0.0],[1.0,0.0],[1.0,1.0],[0.0,1.0],[0.0,0.0]]";

    #[test]
    fn test_parse_feature_collection() {
        let text = collection(&[
            polygon_feature("Lagos", SQUARE),
            polygon_feature("Kano", SQUARE),
        ]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.features[0].name.as_deref(), Some("Lagos"));
        assert_eq!(dataset.features[1].name.as_deref(), Some("Kano"));
    }

    #[test]
    fn test_parse_preserves_document_order() {
        let names = ["Abia", "Borno", "Cross River", "Delta"];
        let features: Vec<String> = names
            .iter()
            .map(|name| polygon_feature(name, SQUARE))
            .collect();
        let dataset = BoundaryDataset::from_geojson(&collection(&features)).unwrap();

        let parsed: Vec<&str> = dataset
            .features
            .iter()
            .filter_map(|f| f.name.as_deref())
            .collect();
        assert_eq!(parsed, names);
    }

    #[test]
    fn test_uppercase_name_property_fallback() {
        let text = collection(&[format!(
            r#"{{"type":"Feature","properties":{{"NAME":"Kaduna"}},"geometry":{{"type":"Polygon","coordinates":[{}]}}}}"#,
            SQUARE
        )]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert_eq!(dataset.features[0].name.as_deref(), Some("Kaduna"));
    }

    #[test]
    fn test_multi_polygon_geometry() {
        let text = collection(&[format!(
            r#"{{"type":"Feature","properties":{{"name":"Rivers"}},"geometry":{{"type":"MultiPolygon","coordinates":[[{}],[{}]]}}}}"#,
            SQUARE, SQUARE
        )]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert_eq!(dataset.len(), 1);
        match &dataset.features[0].outline {
            Outline::MultiPolygon(polygons) => assert_eq!(polygons.len(), 2),
            other => panic!("Expected MultiPolygon, got {:?}", other),
        }
    }

    #[test]
    fn test_null_geometry_feature_is_skipped() {
        let text = collection(&[
            r#"{"type":"Feature","properties":{"name":"Ghost"},"geometry":null}"#.to_string(),
            polygon_feature("Ogun", SQUARE),
        ]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.features[0].name.as_deref(), Some("Ogun"));
    }

    #[test]
    fn test_point_geometry_feature_is_skipped() {
        let text = collection(&[
            r#"{"type":"Feature","properties":{"name":"Capital"},"geometry":{"type":"Point","coordinates":[7.5,9.1]}}"#
                .to_string(),
        ]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert!(dataset.is_empty());
    }

    #[test]
    fn test_short_position_drops_feature() {
        let text = collection(&[
            polygon_feature("Broken", "[[0.0,0.0],[1.0],[0.0,0.0]]"),
            polygon_feature("Edo", SQUARE),
        ]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.features[0].name.as_deref(), Some("Edo"));
    }

    #[test]
    fn test_empty_collection_parses_to_empty_dataset() {
        let dataset = BoundaryDataset::from_geojson(&collection(&[])).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_rejects_invalid_json() {
        let result = BoundaryDataset::from_geojson("{not json");
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_rejects_missing_features_array() {
        let result = BoundaryDataset::from_geojson(r#"{"type":"FeatureCollection"}"#);
        assert!(matches!(result, Err(ParseError::MissingFeatures)));
    }

    #[test]
    fn test_rejects_non_array_features() {
        let result =
            BoundaryDataset::from_geojson(r#"{"type":"FeatureCollection","features":42}"#);
        assert!(matches!(result, Err(ParseError::MissingFeatures)));
    }

    #[test]
    fn test_rejects_non_collection_document() {
        let result = BoundaryDataset::from_geojson(r#"[1,2,3]"#);
        assert!(matches!(result, Err(ParseError::NotACollection)));
    }

    #[test]
    fn test_numeric_feature_id_is_stringified() {
        let text = collection(&[format!(
            r#"{{"type":"Feature","id":7,"properties":{{"name":"Bauchi"}},"geometry":{{"type":"Polygon","coordinates":[{}]}}}}"#,
            SQUARE
        )]);
        let dataset = BoundaryDataset::from_geojson(&text).unwrap();

        assert_eq!(dataset.features[0].id.as_deref(), Some("7"));
    }
}
