//! Data-access error types.

use thiserror::Error;

/// Data-access operation errors.
///
/// Rule rejection, listener cancellation, and zero affected rows are not
/// errors; operations report them as `false`/`0` results for the caller to
/// check. Nothing in this layer retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The configured soft-delete column does not exist on the entity's
    /// schema. Fatal configuration error, surfaced at first use.
    #[error("missing column {field} on {entity}")]
    MissingColumn { entity: String, field: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for data-access operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

impl From<keepsake_core::Error> for StoreError {
    fn from(err: keepsake_core::Error) -> Self {
        match err {
            keepsake_core::Error::InvalidEntity(msg) => Self::Config(msg),
            keepsake_core::Error::Timestamp(msg) => Self::Internal(msg),
        }
    }
}
