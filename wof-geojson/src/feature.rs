use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use serde_json::Value;
use wof_types::{
    normalize_geometry, polygons_contain, Bounds, CartesianPoint2d, GeometryError, GeometryKind,
    Polygon,
};

use crate::centroid::{centroid, Centroid};
use crate::config::SprConfig;
use crate::error::{PropertyError, WofError};
use crate::existential::ExistentialStatus;
use crate::placetypes::PlacetypeSpec;
use crate::properties::{ensure_properties, lookup};
use crate::spr::StandardPlacesResult;
use crate::whosonfirst;

const GEOJSON_PROPERTIES: &[&str] = &[
    "geometry",
    "geometry.type",
    "geometry.coordinates",
    "properties",
];

const WOF_PROPERTIES: &[&str] = &[
    "properties.wof:id",
    "properties.wof:name",
    "properties.wof:placetype",
];

/// Decoded GeoJSON feature document.
///
/// The document is checked to have a geometry with `type` and `coordinates` and a `properties` member when it is
/// loaded. Everything else is resolved lazily by the accessor methods, so a feature can be used even if it lacks the
/// Who's On First properties; use [`Feature::validate_wof`] to require them.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    doc: Value,
}

impl Feature {
    /// Wraps a decoded document.
    pub fn from_value(doc: Value) -> Result<Self, WofError> {
        ensure_properties(&doc, GEOJSON_PROPERTIES)?;
        Ok(Self { doc })
    }

    /// Decodes a document from JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, WofError> {
        Self::from_value(serde_json::from_slice(bytes)?)
    }

    /// Decodes a document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, WofError> {
        Self::from_value(serde_json::from_reader(reader)?)
    }

    /// Reads and decodes a document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WofError> {
        let path = path.as_ref();
        log::debug!("Loading feature from {}", path.display());

        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Checks that the feature has the `wof:id`, `wof:name` and `wof:placetype` properties.
    pub fn validate_wof(&self) -> Result<(), WofError> {
        Ok(ensure_properties(&self.doc, WOF_PROPERTIES)?)
    }

    /// Checks that the placetype of the feature is part of the vocabulary.
    pub fn validate_placetype(&self, spec: &PlacetypeSpec) -> Result<(), WofError> {
        let placetype = whosonfirst::placetype_opt(&self.doc)
            .ok_or_else(|| PropertyError::Missing("properties.wof:placetype".to_string()))?;

        if spec.is_valid(&placetype) {
            Ok(())
        } else {
            Err(WofError::Placetype(placetype))
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &Value {
        &self.doc
    }

    /// Consumes the feature, returning the underlying document.
    pub fn into_document(self) -> Value {
        self.doc
    }

    /// See [`whosonfirst::id`].
    pub fn id(&self) -> Option<i64> {
        whosonfirst::id(&self.doc)
    }

    /// See [`whosonfirst::name`].
    pub fn name(&self) -> String {
        whosonfirst::name(&self.doc)
    }

    /// See [`whosonfirst::placetype`].
    pub fn placetype(&self) -> String {
        whosonfirst::placetype(&self.doc)
    }

    fn geometry(&self) -> Result<&Value, GeometryError> {
        lookup(&self.doc, "geometry")
            .ok_or_else(|| GeometryError::Malformed("feature has no geometry".to_string()))
    }

    /// Type of the geometry.
    pub fn geometry_kind(&self) -> Result<GeometryKind, GeometryError> {
        whosonfirst::geometry_type(&self.doc).parse()
    }

    /// Geometry of the feature normalized into polygons.
    pub fn polygons(&self) -> Result<Vec<Polygon>, GeometryError> {
        normalize_geometry(self.geometry()?)
    }

    /// Bounding boxes of the polygons and their MBR.
    pub fn bounds(&self) -> Result<Bounds, GeometryError> {
        Ok(Bounds::for_polygons(&self.polygons()?))
    }

    /// Returns true if any polygon of the feature contains the point.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = f64>) -> Result<bool, GeometryError> {
        Ok(polygons_contain(&self.polygons()?, point))
    }

    /// See [`centroid`](crate::centroid::centroid).
    pub fn centroid(&self) -> Centroid {
        centroid(&self.doc)
    }

    /// All the lifecycle flags of the feature.
    pub fn existential(&self) -> ExistentialStatus {
        ExistentialStatus::resolve(&self.doc)
    }

    /// Standard Places Result with the default config.
    pub fn spr(&self) -> Result<StandardPlacesResult, WofError> {
        StandardPlacesResult::assemble(&self.doc)
    }

    /// Standard Places Result with the given config.
    pub fn spr_with(&self, config: &SprConfig) -> Result<StandardPlacesResult, WofError> {
        StandardPlacesResult::assemble_with(&self.doc, config)
    }
}

impl TryFrom<Value> for Feature {
    type Error = WofError;

    fn try_from(doc: Value) -> Result<Self, Self::Error> {
        Self::from_value(doc)
    }
}

impl FromStr for Feature {
    type Err = WofError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;
    use wof_types::Coordinate;

    use super::*;

    fn square_with_hole() -> Value {
        json!({
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [
                    [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]],
                    [[4.0, 4.0], [6.0, 4.0], [6.0, 6.0], [4.0, 6.0], [4.0, 4.0]]
                ]
            },
            "properties": {
                "wof:id": 1,
                "wof:name": "Square",
                "wof:placetype": "region"
            }
        })
    }

    #[test]
    fn structural_checks() {
        assert!(Feature::from_value(square_with_hole()).is_ok());

        let doc = json!({"geometry": {"type": "Point"}, "properties": {}});
        assert_matches!(
            Feature::from_value(doc),
            Err(WofError::Property(PropertyError::Missing(path))) if path == "geometry.coordinates"
        );

        let doc = json!({"geometry": {"type": "Point", "coordinates": [0, 0]}});
        assert_matches!(
            Feature::from_value(doc),
            Err(WofError::Property(PropertyError::Missing(path))) if path == "properties"
        );

        assert_matches!("{".parse::<Feature>(), Err(WofError::Json(_)));
    }

    #[test]
    fn wof_validation() {
        let feature = Feature::from_value(square_with_hole()).unwrap();
        assert!(feature.validate_wof().is_ok());

        let mut doc = square_with_hole();
        doc["properties"]
            .as_object_mut()
            .unwrap()
            .remove("wof:name");
        let feature = Feature::from_value(doc).unwrap();
        assert_matches!(
            feature.validate_wof(),
            Err(WofError::Property(PropertyError::Missing(path))) if path == "properties.wof:name"
        );
    }

    #[test]
    fn placetype_validation() {
        let spec = PlacetypeSpec::from_json(
            r#"{"102312311": {"name": "region", "role": "common", "parent": []}}"#,
        )
        .unwrap();

        let feature = Feature::from_value(square_with_hole()).unwrap();
        assert!(feature.validate_placetype(&spec).is_ok());

        let mut doc = square_with_hole();
        doc["properties"]["wof:placetype"] = json!("microhood");
        let feature = Feature::from_value(doc).unwrap();
        assert_matches!(
            feature.validate_placetype(&spec),
            Err(WofError::Placetype(name)) if name == "microhood"
        );
    }

    #[test]
    fn geometry_queries() {
        let feature = Feature::from_value(square_with_hole()).unwrap();
        assert_eq!(feature.geometry_kind(), Ok(GeometryKind::Polygon));

        let polygons = feature.polygons().unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].interiors().len(), 1);

        let bounds = feature.bounds().unwrap();
        assert_eq!(bounds.len(), 1);
        assert_eq!(bounds.mbr().unwrap().x_max, 10.0);

        let inside = Coordinate::new(2.0, 2.0).unwrap();
        let in_hole = Coordinate::new(5.0, 5.0).unwrap();
        let outside = Coordinate::new(20.0, 5.0).unwrap();
        assert_eq!(feature.contains(&inside), Ok(true));
        assert_eq!(feature.contains(&in_hole), Ok(false));
        assert_eq!(feature.contains(&outside), Ok(false));
    }

    #[test]
    fn unsupported_geometry() {
        let doc = json!({
            "geometry": {"type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]]]},
            "properties": {"wof:id": 1}
        });
        let feature = Feature::from_value(doc).unwrap();
        assert_matches!(feature.geometry_kind(), Err(GeometryError::Unsupported(_)));
        assert_matches!(feature.polygons(), Err(GeometryError::Unsupported(_)));
        assert_matches!(
            feature.contains(&Coordinate::NULL_ISLAND),
            Err(GeometryError::Unsupported(_))
        );
        assert!(feature.spr().is_ok());
    }

    #[test]
    fn identity() {
        let feature = Feature::from_value(square_with_hole()).unwrap();
        assert_eq!(feature.id(), Some(1));
        assert_eq!(feature.name(), "Square");
        assert_eq!(feature.placetype(), "region");
        assert_eq!(feature.spr().unwrap().path(), "1/1.geojson");
        assert!(!feature.centroid().is_known());
        assert_eq!(feature.existential().current.flag(), -1);
        assert_eq!(feature.into_document()["type"], json!("Feature"));
    }
}
