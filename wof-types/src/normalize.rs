//! Conversion of raw GeoJSON geometry into canonical [`Polygon`]s.
//!
//! Every supported geometry type yields one or more polygons so that containment and bounding box code only deals
//! with a single shape:
//!
//! * `Point` becomes a polygon whose exterior ring is a rectangle collapsed into the point (5 equal points).
//! * `Polygon` becomes one polygon, the first ring is the exterior and all other rings are holes.
//! * `MultiPolygon` becomes one polygon per member, in input order.
//! * `LineString` and `MultiPoint` become one polygon with an open exterior ring and no holes.
//!
//! Positions are read longitude first (`[lon, lat, ...]`), any further dimensions are ignored. Nothing is returned
//! unless the whole geometry is valid.

use serde_json::Value;

use crate::coordinate::Coordinate;
use crate::error::GeometryError;
use crate::geometry_type::GeometryKind;
use crate::polygon::Polygon;
use crate::ring::Ring;

/// Normalizes `coordinates` of a geometry of the given kind.
pub fn normalize(kind: GeometryKind, coordinates: &Value) -> Result<Vec<Polygon>, GeometryError> {
    let Some(items) = coordinates.as_array() else {
        return Err(GeometryError::Malformed(
            "coordinates must be an array".to_string(),
        ));
    };

    if items.is_empty() {
        return Err(GeometryError::Malformed("coordinates are empty".to_string()));
    }

    let polygons = match kind {
        GeometryKind::Point => {
            let point = decode_position(coordinates)?;
            vec![Polygon::from(Ring::closed(vec![point; 5])?)]
        }
        GeometryKind::LineString | GeometryKind::MultiPoint => {
            vec![Polygon::from(Ring::open(decode_positions(coordinates)?)?)]
        }
        GeometryKind::Polygon => vec![decode_polygon(coordinates)?],
        GeometryKind::MultiPolygon => items
            .iter()
            .map(decode_polygon)
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(polygons)
}

/// Normalizes a GeoJSON geometry object, i.e. a value with `type` and `coordinates` members.
pub fn normalize_geometry(geometry: &Value) -> Result<Vec<Polygon>, GeometryError> {
    let kind = match geometry.get("type") {
        Some(Value::String(tag)) => tag.parse::<GeometryKind>()?,
        Some(other) => return Err(GeometryError::Unsupported(other.to_string())),
        None => {
            return Err(GeometryError::Malformed(
                "geometry has no type".to_string(),
            ))
        }
    };

    let Some(coordinates) = geometry.get("coordinates") else {
        return Err(GeometryError::Malformed(
            "geometry has no coordinates".to_string(),
        ));
    };

    normalize(kind, coordinates)
}

fn decode_polygon(rings: &Value) -> Result<Polygon, GeometryError> {
    let rings = match rings.as_array() {
        Some(rings) if !rings.is_empty() => rings,
        _ => {
            return Err(GeometryError::Malformed(
                "polygon must be a non-empty array of rings".to_string(),
            ))
        }
    };

    let exterior = Ring::closed(decode_positions(&rings[0])?)?;
    let interiors = rings[1..]
        .iter()
        .map(|ring| Ring::closed(decode_positions(ring)?))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(exterior, interiors))
}

fn decode_positions(positions: &Value) -> Result<Vec<Coordinate>, GeometryError> {
    let Some(positions) = positions.as_array() else {
        return Err(GeometryError::Malformed(format!(
            "expected an array of positions, got {positions}"
        )));
    };

    positions.iter().map(decode_position).collect()
}

fn decode_position(position: &Value) -> Result<Coordinate, GeometryError> {
    let malformed = || GeometryError::Malformed(format!("invalid position {position}"));

    let values = position.as_array().ok_or_else(malformed)?;
    if values.len() < 2 {
        return Err(malformed());
    }

    let longitude = values[0].as_f64().ok_or_else(malformed)?;
    let latitude = values[1].as_f64().ok_or_else(malformed)?;

    Coordinate::new(longitude, latitude)
}
