use serde::Serialize;

use crate::coordinate::{CartesianPoint2d, Coordinate};
use crate::ring::Ring;
use crate::BoundingBox;

/// Polygon consists of one exterior ring and zero or more interior rings (holes).
///
/// Holes are expected to lie inside the exterior ring, but this is not checked. Interior rings are evaluated
/// independently of each other, so a hole inside another hole is still a hole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon<P = Coordinate> {
    exterior: Ring<P>,
    interiors: Vec<Ring<P>>,
}

impl<P> Polygon<P> {
    /// Creates a new polygon.
    pub fn new(exterior: Ring<P>, interiors: Vec<Ring<P>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Exterior ring.
    pub fn exterior(&self) -> &Ring<P> {
        &self.exterior
    }

    /// Interior rings (holes).
    pub fn interiors(&self) -> &[Ring<P>] {
        &self.interiors
    }

    /// Iterates over all rings of the polygon starting with the exterior one.
    pub fn iter_rings(&self) -> impl Iterator<Item = &Ring<P>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }
}

impl<P: CartesianPoint2d> Polygon<P> {
    /// Returns true if the point is inside the exterior ring and outside every interior ring.
    pub fn contains_point<Q: CartesianPoint2d<Num = P::Num>>(&self, point: &Q) -> bool {
        self.exterior.contains_point(point)
            && !self
                .interiors
                .iter()
                .any(|hole| hole.contains_point(point))
    }

    /// Bounding box of the exterior ring. Holes never change it.
    pub fn bounding_box(&self) -> Option<BoundingBox<P::Num>> {
        self.exterior.bounding_box()
    }
}

impl<P> From<Ring<P>> for Polygon<P> {
    fn from(value: Ring<P>) -> Self {
        Self {
            exterior: value,
            interiors: vec![],
        }
    }
}

/// Returns true if any of the `polygons` contains the point. Stops at the first match.
pub fn polygons_contain<P, Q>(polygons: &[Polygon<P>], point: &Q) -> bool
where
    P: CartesianPoint2d,
    Q: CartesianPoint2d<Num = P::Num>,
{
    polygons.iter().any(|polygon| polygon.contains_point(point))
}
