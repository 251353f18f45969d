//! Error types used by the crate.

use thiserror::Error;
use wof_types::GeometryError;

/// Problems with the properties of a feature document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// A required property is absent.
    #[error("feature is missing a {0} property")]
    Missing(String),
    /// The id cannot be used to derive a storage path.
    #[error("invalid id {0}")]
    InvalidId(i64),
}

/// Crate error type.
#[derive(Debug, Error)]
pub enum WofError {
    /// The document is not valid JSON.
    #[error("failed to decode document: {0}")]
    Json(#[from] serde_json::Error),
    /// Error reading the document.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
    /// Geometry could not be normalized.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// Required property is missing or invalid.
    #[error(transparent)]
    Property(#[from] PropertyError),
    /// Placetype is not part of the vocabulary.
    #[error("invalid placetype '{0}'")]
    Placetype(String),
}
