//! Error types for Melder.

use thiserror::Error;

/// Top-level error type for Melder operations.
#[derive(Debug, Error)]
pub enum MelderError {
    /// Persistent store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Identifier errors
    #[error("Identifier error: {0}")]
    Id(#[from] IdError),
}

/// Identifier decoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    /// Raw value outside the closed set of identifiers
    #[error("Unknown {kind} index {raw}")]
    Unknown {
        /// Identifier family (command, ability, ...)
        kind: &'static str,
        /// Raw index that failed to decode
        raw: u32,
    },
}

/// Key-value store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing storage could not be read or written
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot represent
    #[error("Invalid store key: {0}")]
    InvalidKey(String),

    /// Value could not be encoded
    #[error("Failed to encode value for {key}: {reason}")]
    Encode {
        /// Store key
        key: String,
        /// Encoder message
        reason: String,
    },
}

/// Result type alias for Melder operations.
pub type MelderResult<T> = Result<T, MelderError>;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
