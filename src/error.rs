//! Error types shared across the crate.

use thiserror::Error;

/// Result type alias for fallible minilearn operations.
pub type Result<T> = std::result::Result<T, Error>;

/// All failures propagate to the caller; nothing is logged and swallowed,
/// and no operation retries.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("cannot operate on an empty sequence")]
    EmptyInput,

    #[error("feature column has zero variance")]
    ZeroVariance,

    #[error("shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("empty partition: {0}")]
    EmptyPartition(String),

    #[error("invalid parameter: {name} = {value}, {reason}")]
    InvalidParameter {
        name: String,
        value: String,
        reason: String,
    },

    #[error("labels must be 0 or 1 for binary classification")]
    InvalidLabel,

    #[error("not fitted; call fit() first")]
    NotFitted,
}
