//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid entity definition: {0}")]
    InvalidEntity(String),

    #[error("invalid timestamp: {0}")]
    Timestamp(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
