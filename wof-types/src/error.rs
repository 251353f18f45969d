//! Error type used by the crate.

use thiserror::Error;

/// Error returned when raw geometry cannot be turned into polygons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Geometry type tag is not one of the supported variants.
    #[error("unsupported geometry type '{0}'")]
    Unsupported(String),
    /// Coordinates are missing, empty, or a ring has too few points.
    #[error("malformed coordinates: {0}")]
    Malformed(String),
    /// A coordinate component is NaN or infinite.
    #[error("coordinate is not finite: ({longitude}, {latitude})")]
    NonFinite {
        /// Longitude as given.
        longitude: f64,
        /// Latitude as given.
        latitude: f64,
    },
}
