//! Error types for the boxfit text-fitting library.

use thiserror::Error;

/// Primary error type for render-pass operations.
///
/// Per-region failures (bad geometry, missing translation, a fault while
/// wrapping) are never surfaced here; they are recorded in the render log
/// and the pass continues. Only pass-level problems become errors.
#[derive(Error, Debug)]
pub enum FitError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty extraction input: no regions to process")]
    EmptyInput,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for FitError.
pub type Result<T> = std::result::Result<T, FitError>;
