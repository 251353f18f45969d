use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Geometry types that can be normalized into polygons.
///
/// Parsed from the GeoJSON `type` tag. Any other tag (including `MultiLineString` and `GeometryCollection`) is
/// rejected with [`GeometryError::Unsupported`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum GeometryKind {
    /// Single position.
    Point,
    /// Sequence of positions.
    LineString,
    /// Exterior ring followed by holes.
    Polygon,
    /// Set of positions.
    MultiPoint,
    /// Set of polygons.
    MultiPolygon,
}

impl GeometryKind {
    /// GeoJSON type tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiPolygon => "MultiPolygon",
        }
    }
}

impl FromStr for GeometryKind {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Point" => Ok(GeometryKind::Point),
            "LineString" => Ok(GeometryKind::LineString),
            "Polygon" => Ok(GeometryKind::Polygon),
            "MultiPoint" => Ok(GeometryKind::MultiPoint),
            "MultiPolygon" => Ok(GeometryKind::MultiPolygon),
            other => Err(GeometryError::Unsupported(other.to_string())),
        }
    }
}

impl TryFrom<String> for GeometryKind {
    type Error = GeometryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GeometryKind> for &'static str {
    fn from(value: GeometryKind) -> Self {
        value.as_str()
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse() {
        for kind in [
            GeometryKind::Point,
            GeometryKind::LineString,
            GeometryKind::Polygon,
            GeometryKind::MultiPoint,
            GeometryKind::MultiPolygon,
        ] {
            assert_eq!(kind.as_str().parse::<GeometryKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        assert_matches!(
            "GeometryCollection".parse::<GeometryKind>(),
            Err(GeometryError::Unsupported(tag)) if tag == "GeometryCollection"
        );
        assert_matches!(
            "polygon".parse::<GeometryKind>(),
            Err(GeometryError::Unsupported(_))
        );
    }
}
