//! Error types for plotvec.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for plotvec operations.
pub type Result<T> = std::result::Result<T, PlotvecError>;

/// Errors that can occur in plotvec.
#[derive(Debug, Error)]
pub enum PlotvecError {
    /// A matrix or vector has the wrong shape.
    #[error("Shape error: expected {expected}, found {found:?}")]
    Shape {
        expected: &'static str,
        found: Vec<usize>,
    },

    /// A per-vector list does not match the number of vectors.
    #[error("Length mismatch: {what} has {found} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Unrecognized colormap name.
    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),

    /// Unparseable color specification.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unparseable legend location.
    #[error("Invalid legend location: {0}")]
    InvalidLegendLoc(String),

    /// An argument outside its valid range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

impl PlotvecError {
    /// Create a Shape error for a matrix that is not 2x2.
    pub fn matrix_shape(found: &[usize]) -> Self {
        Self::Shape {
            expected: "a 2x2 matrix",
            found: found.to_vec(),
        }
    }

    /// Create a Shape error for a vector that is not 2-D.
    pub fn vector_shape(found: &[usize]) -> Self {
        Self::Shape {
            expected: "a 2-d vector",
            found: found.to_vec(),
        }
    }

    /// Create a LengthMismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, found: usize) -> Self {
        Self::LengthMismatch {
            what,
            expected,
            found,
        }
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
