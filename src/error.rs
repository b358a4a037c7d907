use thiserror::Error;

/// Top-level error type for the polyzone crate.
#[derive(Debug, Error)]
pub enum PolyzoneError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Zone(#[from] ZoneError),
}

/// Errors related to vector arithmetic.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("missing {operand} operand")]
    MissingOperand { operand: &'static str },

    #[error("zero-length vector")]
    ZeroVector,

    #[error("{parameter} range [{start}, {end}) is empty or not finite")]
    InvalidRange {
        parameter: &'static str,
        start: f64,
        end: f64,
    },
}

/// Errors related to zone construction and lookup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    #[error("a polygon zone needs at least 3 points, got {count}")]
    InsufficientVertices { count: usize },

    #[error("zone not found")]
    ZoneNotFound,
}

/// Convenience type alias for results using [`PolyzoneError`].
pub type Result<T> = std::result::Result<T, PolyzoneError>;
