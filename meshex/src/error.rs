//! Error types for meshex.

use thiserror::Error;

use crate::backend::BackendError;
use meshex_core::CoreError;

/// Errors that can occur during surface extraction.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Extraction kernel error from meshex_core.
    #[error("extraction kernel error: {0}")]
    Core(#[from] CoreError),

    /// Tensor shape mismatch.
    #[error("tensor shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape.
        expected: Vec<usize>,
        /// Actual shape.
        got: Vec<usize>,
    },

    /// Invalid configuration.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// The algorithm name is not in the registry.
    #[error("unknown extraction algorithm `{name}`")]
    UnknownAlgorithm {
        /// The requested algorithm name.
        name: String,
    },

    /// Backend error from the dual marching cubes path.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// Tensor readback produced invalid or unconvertible data.
    #[error("invalid tensor data: {message}")]
    InvalidData {
        /// Description of the error.
        message: String,
    },
}

/// Result type for meshex operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
