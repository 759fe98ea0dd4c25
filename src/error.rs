//! Error types for trueno-draw operations.

use crate::primitive::PrimitiveKind;
use crate::scene::ElementId;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-draw operations.
///
/// Degenerate but valid geometry (coincident points, zero scale rate,
/// zero-size ellipses) and fully clipped lines are never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Control point count does not satisfy the primitive kind.
    #[error("Invalid geometry: {kind} requires {required} control points, got {actual}")]
    InvalidGeometry {
        /// Kind being constructed.
        kind: PrimitiveKind,
        /// Human readable requirement, e.g. "exactly 2" or "at least 1".
        required: &'static str,
        /// Number of control points supplied.
        actual: usize,
    },

    /// Clipping was requested on a primitive that is not a line.
    #[error("Cannot clip a {0}: only lines support clipping")]
    NotClippable(PrimitiveKind),

    /// Invalid dimensions for a scene.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// No element with the given id exists in the scene.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },
}
