//! Error types for keyring access and password insertion.

use thiserror::Error;

/// Errors that can occur while reading or inserting secrets.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Secret Service unavailable: {0}")]
    Unavailable(String),

    #[error("Keyring collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Keyring is locked: {0}")]
    Locked(String),

    #[error("Keyring error: {0}")]
    Keyring(String),

    #[error("Secret for '{0}' is not valid UTF-8")]
    NotUtf8(String),

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Keyring access is not supported on this platform")]
    UnsupportedPlatform,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for secret operations.
pub type Result<T> = std::result::Result<T, SecretError>;
