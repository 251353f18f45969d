//! Who's On First feature documents and the metadata derived from them.
//!
//! A [`Feature`] wraps a decoded GeoJSON document. Its geometry is normalized into polygons by [`wof_types`] and
//! its properties are read through the lenient path lookup of the [`properties`] module. From these the crate
//! derives:
//!
//! * the [`Centroid`] of the feature, taken from the label, reverse geocoding or geometric properties;
//! * the lifecycle flags of the feature ([`ExistentialStatus`]), each one an [`ExistentialFlag`] that records
//!   whether its value is actually known;
//! * the storage path and URI of the feature file ([`uri`]);
//! * a [`StandardPlacesResult`], the flat summary combining all of the above.
//!
//! Resolvers never fail on missing properties, they return documented defaults instead. The only hard errors are
//! malformed documents, unsupported geometries and features without a usable id.
//!
//! ```
//! use wof_geojson::Feature;
//! use wof_types::Coordinate;
//!
//! let feature: Feature = r#"{
//!     "type": "Feature",
//!     "geometry": {"type": "Polygon", "coordinates": [[[-73.6, 45.5], [-73.6, 45.6], [-73.5, 45.6], [-73.5, 45.5], [-73.6, 45.5]]]},
//!     "properties": {"wof:id": 101736545, "wof:name": "Montreal", "wof:placetype": "locality"}
//! }"#.parse()?;
//!
//! assert!(feature.contains(&Coordinate::new(-73.55, 45.55)?)?);
//!
//! let spr = feature.spr()?;
//! assert_eq!(spr.path(), "101/736/545/101736545.geojson");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Optional features
//!
//! * `geo-types` - enables `geo_types::Coord` and `geo_types::Point` as query points of [`Feature::contains`].

pub mod centroid;
mod config;
pub mod error;
pub mod existential;
mod feature;
pub mod placetypes;
pub mod properties;
mod spr;
pub mod uri;
pub mod whosonfirst;

pub use centroid::{Centroid, CentroidSource};
pub use config::SprConfig;
pub use error::{PropertyError, WofError};
pub use existential::{ExistentialFlag, ExistentialStatus};
pub use feature::Feature;
pub use placetypes::{Placetype, PlacetypeFilter, PlacetypeSpec};
pub use spr::StandardPlacesResult;
