//! Planar geometry primitives used to normalize Who's On First feature geometries.
//!
//! Raw GeoJSON geometry of any supported type is converted by [`normalize`] into a list of [`Polygon`]s, each
//! consisting of an exterior [`Ring`] and zero or more holes. Polygons support hole-aware containment tests
//! ([`Polygon::contains_point`], [`polygons_contain`]) and their exterior rings are aggregated into [`Bounds`]: a
//! [`BoundingBox`] per polygon plus the minimum bounding rectangle of all of them.
//!
//! Coordinates are treated as planar `(longitude, latitude)` pairs. No projection correction is done and any
//! elevation component of the input is ignored.
//!
//! All the operations are pure functions over immutable values and can be freely used from multiple threads.
//!
//! # Optional features
//!
//! * `geojson` (default) - [`normalize_geojson`] for geometries decoded by the `geojson` crate.
//! * `geo-types` - `geo_types::Coord` and `geo_types::Point` can be used as query points.

mod bounding_box;
mod coordinate;
pub mod error;
mod geometry_type;
mod normalize;
mod polygon;
mod ring;
mod segment;

#[cfg(feature = "geojson")]
mod geojson;
#[cfg(feature = "geo-types")]
mod geo_types;

pub use bounding_box::{BoundingBox, Bounds};
pub use coordinate::{CartesianPoint2d, Coordinate};
pub use error::GeometryError;
#[cfg(feature = "geojson")]
pub use crate::geojson::normalize_geojson;
pub use geometry_type::GeometryKind;
pub use normalize::{normalize, normalize_geometry};
pub use polygon::{polygons_contain, Polygon};
pub use ring::Ring;
pub use segment::Segment;
