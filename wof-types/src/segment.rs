use crate::coordinate::CartesianPoint2d;

/// A straight line segment between two points.
#[derive(Debug, PartialEq)]
pub struct Segment<'a, Point>(pub &'a Point, pub &'a Point);

impl<P: CartesianPoint2d> Segment<'_, P> {
    /// Returns true if a horizontal ray cast from `point` towards positive `x` crosses the segment.
    ///
    /// The segment is treated as half-open in `y` (the lower endpoint is included, the upper one is not), so a ray
    /// passing exactly through a shared vertex of two consecutive segments is counted once. Horizontal segments never
    /// cross the ray.
    pub fn crosses_ray<Point: CartesianPoint2d<Num = P::Num>>(&self, point: &Point) -> bool {
        let (x, y) = (point.x(), point.y());
        let (x0, y0) = (self.0.x(), self.0.y());
        let (x1, y1) = (self.1.x(), self.1.y());

        if (y0 > y) == (y1 > y) {
            return false;
        }

        let x_cross = x0 + (y - y0) * (x1 - x0) / (y1 - y0);
        x < x_cross
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Coordinate;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y).unwrap()
    }

    #[test]
    fn crosses_ray() {
        let a = c(1.0, 0.0);
        let b = c(1.0, 2.0);
        let segment = Segment(&a, &b);

        assert!(segment.crosses_ray(&c(0.0, 1.0)));
        assert!(!segment.crosses_ray(&c(2.0, 1.0)));
        assert!(!segment.crosses_ray(&c(0.0, 3.0)));
        assert!(!segment.crosses_ray(&c(0.0, -1.0)));
    }

    #[test]
    fn horizontal_segment_never_crosses() {
        let a = c(0.0, 1.0);
        let b = c(5.0, 1.0);
        assert!(!Segment(&a, &b).crosses_ray(&c(-1.0, 1.0)));
    }

    #[test]
    fn shared_vertex_counted_once() {
        let a = c(1.0, 0.0);
        let b = c(1.0, 1.0);
        let d = c(1.0, 2.0);
        let p = c(0.0, 1.0);

        let crossings = [Segment(&a, &b), Segment(&b, &d)]
            .iter()
            .filter(|s| s.crosses_ray(&p))
            .count();
        assert_eq!(crossings, 1);
    }
}
