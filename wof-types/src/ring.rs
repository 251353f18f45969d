//! Ring is an ordered sequence of points describing a boundary.
//!
//! Rings can be:
//! * **closed** - exterior and interior rings of polygons. A closed ring must have at least
//!   [`Ring::MIN_CLOSED_POINTS`] points.
//! * **open** - rings synthesized from `LineString` and `MultiPoint` geometries. An open ring must have at least one
//!   point.
//!
//! The first and the last points of a ring need not be identical. Containment tests always treat a ring as closed by
//! an implicit segment from the last point back to the first one, see [`Ring::iter_segments_closing`].

use serde::Serialize;

use crate::coordinate::{CartesianPoint2d, Coordinate};
use crate::error::GeometryError;
use crate::segment::Segment;
use crate::BoundingBox;

/// Ordered sequence of points. See module level documentation for details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ring<P = Coordinate> {
    points: Vec<P>,
    is_closed: bool,
}

impl<P> Ring<P> {
    /// Minimum number of points in a closed ring.
    pub const MIN_CLOSED_POINTS: usize = 3;

    /// Creates a closed ring. Fails if there are less than [`Ring::MIN_CLOSED_POINTS`] points.
    pub fn closed(points: Vec<P>) -> Result<Self, GeometryError> {
        if points.len() < Self::MIN_CLOSED_POINTS {
            return Err(GeometryError::Malformed(format!(
                "ring must have at least {} points, got {}",
                Self::MIN_CLOSED_POINTS,
                points.len()
            )));
        }

        Ok(Self {
            points,
            is_closed: true,
        })
    }

    /// Creates an open ring. Fails if there are no points.
    pub fn open(points: Vec<P>) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::Malformed(
                "ring must have at least one point".to_string(),
            ));
        }

        Ok(Self {
            points,
            is_closed: false,
        })
    }

    /// Whether the ring was built as a closed one.
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Points of the ring as given at construction.
    pub fn points(&self) -> &[P] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the ring has no points. Never the case for rings built with [`Ring::closed`] or [`Ring::open`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the points of the ring.
    pub fn iter_points(&self) -> impl Iterator<Item = &P> {
        self.points.iter()
    }

    /// Same as [`Ring::iter_points`] but repeats the first point at the end.
    pub fn iter_points_closing(&self) -> impl Iterator<Item = &P> {
        ClosingPointsIterator::new(self.points.iter())
    }

    /// Iterates over segments between consecutive points including the segment from the last point back to the first
    /// one. This is the edge set used by the containment test regardless of whether the ring is open.
    pub fn iter_segments_closing(&self) -> impl Iterator<Item = Segment<'_, P>> {
        SegmentIterator::new(ClosingPointsIterator::new(self.points.iter()))
    }
}

impl<P: CartesianPoint2d> Ring<P> {
    /// Even-odd (ray casting) containment test.
    ///
    /// Counts crossings of a horizontal ray from `point` with the ring edges; an odd count means the point is inside.
    /// Points exactly on the boundary may be classified either way.
    pub fn contains_point<Q: CartesianPoint2d<Num = P::Num>>(&self, point: &Q) -> bool {
        self.iter_segments_closing()
            .filter(|segment| segment.crosses_ray(point))
            .count()
            % 2
            == 1
    }

    /// Bounding box of all the points of the ring.
    pub fn bounding_box(&self) -> Option<BoundingBox<P::Num>> {
        BoundingBox::from_points(self.points.iter())
    }
}

struct ClosingPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    first_point: Option<&'a P>,
    is_started: bool,
}

impl<'a, P, Iter> ClosingPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            first_point: None,
            is_started: false,
        }
    }
}

impl<'a, P, Iter> Iterator for ClosingPointsIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.points_iter.next();
        if !self.is_started {
            self.is_started = true;
            self.first_point = next;
        }

        if next.is_none() {
            self.first_point.take()
        } else {
            next
        }
    }
}

struct SegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> SegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for SegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_point = self.points_iter.next()?;
            if let Some(prev) = self.prev_point.replace(next_point) {
                return Some(Segment(prev, next_point));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y).unwrap()
    }

    #[test]
    fn closed_ring_needs_three_points() {
        assert_matches!(
            Ring::closed(vec![c(0.0, 0.0), c(1.0, 1.0)]),
            Err(GeometryError::Malformed(_))
        );
        assert!(Ring::closed(vec![c(0.0, 0.0), c(1.0, 1.0), c(1.0, 0.0)]).is_ok());
    }

    #[test]
    fn open_ring_needs_one_point() {
        assert_matches!(
            Ring::<Coordinate>::open(vec![]),
            Err(GeometryError::Malformed(_))
        );
        let ring = Ring::open(vec![c(0.0, 0.0)]).unwrap();
        assert!(!ring.is_closed());
        assert_eq!(ring.len(), 1);
    }

    #[test]
    fn iter_points_closing() {
        let ring = Ring::open(vec![c(0.0, 0.0), c(1.0, 1.0)]).unwrap();
        assert_eq!(ring.iter_points_closing().count(), 3);
        assert_eq!(*ring.iter_points_closing().last().unwrap(), c(0.0, 0.0));
    }

    #[test]
    fn iter_segments_closing() {
        let ring = Ring::open(vec![c(0.0, 0.0)]).unwrap();
        assert_eq!(ring.iter_segments_closing().count(), 1);

        let ring = Ring::closed(vec![c(0.0, 0.0), c(1.0, 1.0), c(1.0, 0.0)]).unwrap();
        assert_eq!(ring.iter_segments_closing().count(), 3);
        assert_eq!(
            ring.iter_segments_closing().last().unwrap(),
            Segment(&c(1.0, 0.0), &c(0.0, 0.0))
        );
    }

    #[test]
    fn contains_point_open_and_closed_same() {
        let points = vec![c(0.0, 0.0), c(0.0, 4.0), c(4.0, 4.0), c(4.0, 0.0)];
        let closed = Ring::closed(points.clone()).unwrap();
        let open = Ring::open(points).unwrap();

        for p in [c(2.0, 2.0), c(0.5, 3.5)] {
            assert!(closed.contains_point(&p));
            assert!(open.contains_point(&p));
        }
        for p in [c(5.0, 2.0), c(-1.0, -1.0), c(2.0, 4.5)] {
            assert!(!closed.contains_point(&p));
            assert!(!open.contains_point(&p));
        }
    }

    #[test]
    fn contains_point_concave() {
        // U shape with the notch opening up between x = 1 and x = 2
        let ring = Ring::closed(vec![
            c(0.0, 0.0),
            c(0.0, 3.0),
            c(1.0, 3.0),
            c(1.0, 1.0),
            c(2.0, 1.0),
            c(2.0, 3.0),
            c(3.0, 3.0),
            c(3.0, 0.0),
        ])
        .unwrap();

        assert!(ring.contains_point(&c(0.5, 2.0)));
        assert!(ring.contains_point(&c(2.5, 2.0)));
        assert!(ring.contains_point(&c(1.5, 0.5)));
        assert!(!ring.contains_point(&c(1.5, 2.0)));
    }

    #[test]
    fn winding_does_not_matter() {
        let cw = Ring::closed(vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0), c(1.0, 0.0)]).unwrap();
        let ccw = Ring::closed(vec![c(0.0, 0.0), c(1.0, 0.0), c(1.0, 1.0), c(0.0, 1.0)]).unwrap();
        let p = c(0.5, 0.5);
        assert!(cw.contains_point(&p));
        assert!(ccw.contains_point(&p));
    }

    #[test]
    fn bounding_box() {
        let ring = Ring::open(vec![c(3.0, -1.0), c(-2.0, 4.0), c(1.0, 1.0)]).unwrap();
        assert_eq!(
            ring.bounding_box(),
            Some(BoundingBox::new(-2.0, -1.0, 3.0, 4.0))
        );
    }
}
