//! Domain error types.
//!
//! These errors represent validation failures on caller-supplied values.
//! They are distinct from store and HTTP errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A place identifier was empty or not an integer
    #[error("invalid place id: {0:?}")]
    InvalidPlaceId(String),

    /// A coordinate component was NaN or infinite
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// A required field was missing or blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}
