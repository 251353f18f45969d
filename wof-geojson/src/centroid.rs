//! Representative point of a feature.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use wof_types::Coordinate;

use crate::properties::property;

/// Where a [`Centroid`] was taken from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CentroidSource {
    /// `lbl:latitude` / `lbl:longitude`, a point chosen for placing labels.
    #[serde(rename = "lbl")]
    Label,
    /// `reversegeo:latitude` / `reversegeo:longitude`, a point used for reverse geocoding.
    #[serde(rename = "reversegeo")]
    ReverseGeocoded,
    /// `geom:latitude` / `geom:longitude`, computed from the geometry.
    #[serde(rename = "geom")]
    Geometric,
    /// No source was available; the coordinate is null island.
    Unknown,
}

impl CentroidSource {
    /// Prefix of the property pair the centroid was read from, or `"unknown"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            CentroidSource::Label => "lbl",
            CentroidSource::ReverseGeocoded => "reversegeo",
            CentroidSource::Geometric => "geom",
            CentroidSource::Unknown => "unknown",
        }
    }
}

impl Display for CentroidSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const CANDIDATES: [(CentroidSource, &str, &str); 3] = [
    (
        CentroidSource::Label,
        "properties.lbl:latitude",
        "properties.lbl:longitude",
    ),
    (
        CentroidSource::ReverseGeocoded,
        "properties.reversegeo:latitude",
        "properties.reversegeo:longitude",
    ),
    (
        CentroidSource::Geometric,
        "properties.geom:latitude",
        "properties.geom:longitude",
    ),
];

/// Coordinate tagged with its source.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    coordinate: Coordinate,
    source: CentroidSource,
}

impl Centroid {
    /// Creates a new centroid.
    pub fn new(coordinate: Coordinate, source: CentroidSource) -> Self {
        Self { coordinate, source }
    }

    /// Null island tagged with [`CentroidSource::Unknown`].
    pub fn unknown() -> Self {
        Self::new(Coordinate::NULL_ISLAND, CentroidSource::Unknown)
    }

    /// The point itself.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Where the point was taken from.
    pub fn source(&self) -> CentroidSource {
        self.source
    }

    /// Returns false for the null island fallback.
    pub fn is_known(&self) -> bool {
        self.source != CentroidSource::Unknown
    }
}

/// Resolves the centroid of a feature document.
///
/// The label, reverse geocoding and geometric property pairs are tried in this order; the first pair that has both
/// latitude and longitude wins. A pair with only one of them is skipped. Never fails: if no pair is present
/// [`Centroid::unknown`] is returned.
pub fn centroid(doc: &Value) -> Centroid {
    for (source, lat_path, lon_path) in CANDIDATES {
        let (Some(latitude), Some(longitude)) = (
            property::<f64>(doc, &[lat_path]),
            property::<f64>(doc, &[lon_path]),
        ) else {
            continue;
        };

        match Coordinate::from_lat_lon(latitude, longitude) {
            Ok(coordinate) => return Centroid::new(coordinate, source),
            Err(err) => log::debug!("Skipping {source} centroid: {err}"),
        }
    }

    log::debug!("No centroid properties found, falling back to null island");
    Centroid::unknown()
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn label_wins_over_geometry() {
        let doc = json!({"properties": {
            "geom:latitude": 45.5,
            "geom:longitude": -73.5,
            "lbl:latitude": 45.52,
            "lbl:longitude": -73.57,
        }});

        let centroid = centroid(&doc);
        assert_eq!(centroid.source(), CentroidSource::Label);
        assert_abs_diff_eq!(
            centroid.coordinate(),
            Coordinate::new(-73.57, 45.52).unwrap()
        );
    }

    #[test]
    fn incomplete_pair_is_skipped() {
        let doc = json!({"properties": {
            "lbl:latitude": 45.52,
            "reversegeo:latitude": 45.51,
            "reversegeo:longitude": -73.56,
            "geom:latitude": 45.5,
            "geom:longitude": -73.5,
        }});

        let centroid = centroid(&doc);
        assert_eq!(centroid.source(), CentroidSource::ReverseGeocoded);
        assert_eq!(centroid.coordinate().latitude(), 45.51);
        assert_eq!(centroid.coordinate().longitude(), -73.56);
    }

    #[test]
    fn geometric_centroid() {
        let doc = json!({"properties": {"geom:latitude": "48.85", "geom:longitude": 2.35}});
        let centroid = centroid(&doc);
        assert_eq!(centroid.source(), CentroidSource::Geometric);
        assert!(centroid.is_known());
        assert_eq!(centroid.coordinate().latitude(), 48.85);
    }

    #[test]
    fn null_island_fallback() {
        let doc = json!({"properties": {"wof:name": "Nowhere"}});
        let centroid = centroid(&doc);
        assert_eq!(centroid, Centroid::unknown());
        assert_eq!(centroid.coordinate(), Coordinate::NULL_ISLAND);
        assert_eq!(centroid.source().to_string(), "unknown");
        assert!(!centroid.is_known());
    }

    #[test]
    fn source_serialization() {
        assert_eq!(
            serde_json::to_value(CentroidSource::ReverseGeocoded).unwrap(),
            json!("reversegeo")
        );
        assert_eq!(
            serde_json::to_value(CentroidSource::Unknown).unwrap(),
            json!("unknown")
        );
    }
}
