//! Normalization of already decoded [`geojson`] geometries.

use geojson::{PolygonType, Position, Value};

use crate::coordinate::Coordinate;
use crate::error::GeometryError;
use crate::geometry_type::GeometryKind;
use crate::polygon::Polygon;
use crate::ring::Ring;

impl TryFrom<&Value> for GeometryKind {
    type Error = GeometryError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Point(_) => Ok(GeometryKind::Point),
            Value::MultiPoint(_) => Ok(GeometryKind::MultiPoint),
            Value::LineString(_) => Ok(GeometryKind::LineString),
            Value::Polygon(_) => Ok(GeometryKind::Polygon),
            Value::MultiPolygon(_) => Ok(GeometryKind::MultiPolygon),
            Value::MultiLineString(_) | Value::GeometryCollection(_) => {
                Err(GeometryError::Unsupported(geometry_type(value)))
            }
        }
    }
}

/// Same as [`normalize`](crate::normalize) for a `geojson` geometry.
pub fn normalize_geojson(geometry: &geojson::Geometry) -> Result<Vec<Polygon>, GeometryError> {
    let polygons = match &geometry.value {
        Value::Point(position) => {
            let point = convert_position(position)?;
            vec![Polygon::from(Ring::closed(vec![point; 5])?)]
        }
        Value::MultiPoint(positions) | Value::LineString(positions) => {
            vec![Polygon::from(Ring::open(convert_positions(positions)?)?)]
        }
        Value::Polygon(rings) => vec![convert_polygon(rings)?],
        Value::MultiPolygon(polygons) => {
            if polygons.is_empty() {
                return Err(GeometryError::Malformed("coordinates are empty".to_string()));
            }

            polygons
                .iter()
                .map(convert_polygon)
                .collect::<Result<Vec<_>, _>>()?
        }
        Value::MultiLineString(_) | Value::GeometryCollection(_) => {
            return Err(GeometryError::Unsupported(geometry_type(&geometry.value)))
        }
    };

    Ok(polygons)
}

fn geometry_type(value: &Value) -> String {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
    .to_string()
}

fn convert_polygon(rings: &PolygonType) -> Result<Polygon, GeometryError> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(GeometryError::Malformed(
            "polygon must have at least one ring".to_string(),
        ));
    };

    Ok(Polygon::new(
        Ring::closed(convert_positions(exterior)?)?,
        interiors
            .iter()
            .map(|ring| Ring::closed(convert_positions(ring)?))
            .collect::<Result<Vec<_>, _>>()?,
    ))
}

fn convert_positions(positions: &[Position]) -> Result<Vec<Coordinate>, GeometryError> {
    positions.iter().map(|p| convert_position(p)).collect()
}

fn convert_position(position: &[f64]) -> Result<Coordinate, GeometryError> {
    if position.len() < 2 {
        return Err(GeometryError::Malformed(
            "position must contain at least 2 dimensions".to_string(),
        ));
    }

    Coordinate::new(position[0], position[1])
}
