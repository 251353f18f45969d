//! Axis-aligned bounding boxes and their aggregation into a minimum bounding rectangle (MBR).

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::coordinate::{CartesianPoint2d, Coordinate};
use crate::error::GeometryError;
use crate::polygon::Polygon;

/// Axis-aligned bounding box. `x_min <= x_max` and `y_min <= y_max` always hold for boxes built from points.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox<N = f64> {
    /// Minimum x (longitude).
    pub x_min: N,
    /// Minimum y (latitude).
    pub y_min: N,
    /// Maximum x (longitude).
    pub x_max: N,
    /// Maximum y (latitude).
    pub y_max: N,
}

impl<N: Float> BoundingBox<N> {
    /// Creates a new box from its extremes.
    pub fn new(x_min: N, y_min: N, x_max: N, y_max: N) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// Zero-area box around one point.
    pub fn from_point(p: &impl CartesianPoint2d<Num = N>) -> Self {
        Self {
            x_min: p.x(),
            x_max: p.x(),
            y_min: p.y(),
            y_max: p.y(),
        }
    }

    /// Smallest box containing all the points, or `None` if the iterator is empty.
    pub fn from_points<'a, P: CartesianPoint2d<Num = N> + 'a>(
        mut points: impl Iterator<Item = &'a P>,
    ) -> Option<Self> {
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |bbox, p| {
            bbox.merge(Self::from_point(p))
        }))
    }

    /// Smallest box containing both `self` and `other`.
    pub fn merge(&self, other: Self) -> Self {
        Self {
            x_min: self.x_min.min(other.x_min),
            y_min: self.y_min.min(other.y_min),
            x_max: self.x_max.max(other.x_max),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Returns true if the point lies inside or on the border of the box.
    pub fn contains(&self, point: &impl CartesianPoint2d<Num = N>) -> bool {
        self.x_min <= point.x()
            && self.x_max >= point.x()
            && self.y_min <= point.y()
            && self.y_max >= point.y()
    }

    /// Returns true if `other` lies completely inside `self` (borders included).
    pub fn contains_box(&self, other: &Self) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }
}

impl BoundingBox<f64> {
    /// South-west corner. Fails if the box was created from non-finite values.
    pub fn min(&self) -> Result<Coordinate, GeometryError> {
        Coordinate::new(self.x_min, self.y_min)
    }

    /// North-east corner. Fails if the box was created from non-finite values.
    pub fn max(&self) -> Result<Coordinate, GeometryError> {
        Coordinate::new(self.x_max, self.y_max)
    }
}

/// Bounding boxes of every polygon of a feature plus their minimum bounding rectangle.
///
/// The MBR starts out empty and the first box expands it to exactly that box. `Bounds` built from zero polygons
/// stays empty: [`Bounds::mbr`] returns `None` in this case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounds<N = f64> {
    boxes: Vec<BoundingBox<N>>,
    mbr: Option<BoundingBox<N>>,
}

impl<N: Float> Default for Bounds<N> {
    fn default() -> Self {
        Self {
            boxes: vec![],
            mbr: None,
        }
    }
}

impl<N: Float> Bounds<N> {
    /// Bounds without any boxes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bounding boxes of the exterior rings of the `polygons` in the same order. Interior rings are ignored.
    pub fn for_polygons<P: CartesianPoint2d<Num = N>>(polygons: &[Polygon<P>]) -> Self {
        polygons.iter().filter_map(Polygon::bounding_box).collect()
    }

    /// Adds one more box, expanding the MBR.
    pub fn push(&mut self, bbox: BoundingBox<N>) {
        self.mbr = Some(match self.mbr {
            Some(mbr) => mbr.merge(bbox),
            None => bbox,
        });
        self.boxes.push(bbox);
    }

    /// Per-polygon boxes.
    pub fn boxes(&self) -> &[BoundingBox<N>] {
        &self.boxes
    }

    /// Minimum bounding rectangle of all the boxes, or `None` if there are no boxes.
    pub fn mbr(&self) -> Option<&BoundingBox<N>> {
        self.mbr.as_ref()
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true if there are no boxes.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl<N: Float> FromIterator<BoundingBox<N>> for Bounds<N> {
    fn from_iter<T: IntoIterator<Item = BoundingBox<N>>>(iter: T) -> Self {
        let mut bounds = Self::empty();
        for bbox in iter {
            bounds.push(bbox);
        }

        bounds
    }
}
