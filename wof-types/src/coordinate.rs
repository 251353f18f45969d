use std::fmt::{Display, Formatter};

use approx::AbsDiffEq;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A point in a planar 2d space.
///
/// All the algorithms of the crate (containment, bounding boxes) are written against this trait, so any point type
/// with `x` and `y` components can be used as a query point. For geographic coordinates `x` is longitude and `y` is
/// latitude; no projection correction is applied.
pub trait CartesianPoint2d {
    /// Numeric type of the coordinates.
    type Num: Float;

    /// X coordinate (longitude).
    fn x(&self) -> Self::Num;
    /// Y coordinate (latitude).
    fn y(&self) -> Self::Num;

    /// Returns true if both components of the points are exactly equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

/// Planar `(longitude, latitude)` pair.
///
/// Both components are guaranteed to be finite. Serialized as a GeoJSON position, i.e. `[longitude, latitude]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    /// The `(0, 0)` coordinate, used as a "no reliable location" sentinel.
    pub const NULL_ISLAND: Coordinate = Coordinate {
        longitude: 0.0,
        latitude: 0.0,
    };

    /// Creates a new coordinate. Fails if either component is NaN or infinite.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeometryError> {
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(GeometryError::NonFinite {
                longitude,
                latitude,
            });
        }

        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Same as [`Coordinate::new`] but with latitude first.
    pub fn from_lat_lon(latitude: f64, longitude: f64) -> Result<Self, GeometryError> {
        Self::new(longitude, latitude)
    }

    /// Longitude.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl CartesianPoint2d for Coordinate {
    type Num = f64;

    fn x(&self) -> f64 {
        self.longitude
    }

    fn y(&self) -> f64 {
        self.latitude
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = GeometryError;

    fn try_from([longitude, latitude]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(longitude, latitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        [value.longitude, value.latitude]
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

impl AbsDiffEq for Coordinate {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.longitude.abs_diff_eq(&other.longitude, epsilon)
            && self.latitude.abs_diff_eq(&other.latitude, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert_matches!(
            Coordinate::new(f64::NAN, 0.0),
            Err(GeometryError::NonFinite { .. })
        );
        assert_matches!(
            Coordinate::new(0.0, f64::INFINITY),
            Err(GeometryError::NonFinite { .. })
        );
        assert!(Coordinate::new(-73.6, 45.5).is_ok());
    }

    #[test]
    fn lat_lon_order() {
        let c = Coordinate::from_lat_lon(45.5, -73.6).unwrap();
        assert_eq!(c.longitude(), -73.6);
        assert_eq!(c.latitude(), 45.5);
        assert_eq!(c.x(), -73.6);
        assert_eq!(c.y(), 45.5);
    }

    #[test]
    fn serializes_as_position() {
        let c = Coordinate::new(2.35, 48.85).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "[2.35,48.85]");

        let back: Coordinate = serde_json::from_str("[2.35,48.85]").unwrap();
        assert_eq!(back, c);
    }
}
