use geo_types::{Coord, CoordFloat, Point};

use crate::coordinate::{CartesianPoint2d, Coordinate};
use crate::error::GeometryError;

impl<T: CoordFloat> CartesianPoint2d for Coord<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.x
    }

    fn y(&self) -> Self::Num {
        self.y
    }
}

impl<T: CoordFloat> CartesianPoint2d for Point<T> {
    type Num = T;

    fn x(&self) -> Self::Num {
        self.0.x
    }

    fn y(&self) -> Self::Num {
        self.0.y
    }
}

impl TryFrom<Coord<f64>> for Coordinate {
    type Error = GeometryError;

    fn try_from(value: Coord<f64>) -> Result<Self, Self::Error> {
        Coordinate::new(value.x, value.y)
    }
}

impl From<Coordinate> for Coord<f64> {
    fn from(value: Coordinate) -> Self {
        Coord {
            x: value.longitude(),
            y: value.latitude(),
        }
    }
}
