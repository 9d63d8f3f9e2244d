//! Error types for normalizer construction
//!
//! The string operations themselves never fail; only building a
//! [`PathNormalizer`](crate::PathNormalizer) can.

use thiserror::Error;

/// The error type for normalizer construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The process working directory could not be read
    #[error("Cannot read working directory: {message}")]
    WorkingDirectory { message: String },

    /// Only `/` and `\` can serve as the output separator
    #[error("Unsupported separator {separator:?}: expected '/' or '\\'")]
    UnsupportedSeparator { separator: char },
}

impl From<std::io::Error> for PathError {
    fn from(err: std::io::Error) -> Self {
        PathError::WorkingDirectory {
            message: err.to_string(),
        }
    }
}

/// Result type for normalizer construction
pub type Result<T> = std::result::Result<T, PathError>;
