//! Core error types for WealthMate.
//!
//! These types are provider-agnostic. Key-value provider implementations
//! (in-memory, file-backed, ...) convert their own failures into
//! [`StorageError`] before returning them.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage operation failed: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A record carries NaN or infinity, which would be written as `null`.
    #[error("Refusing to write non-finite amount under key {0}")]
    NonFiniteAmount(String),
}

/// Failures reported by a key-value provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The stored value could not be read.
    #[error("Failed to read key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    /// The value could not be written.
    #[error("Failed to write key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    /// The provider has no room left for the value.
    #[error("Storage quota exceeded while writing key {key}")]
    QuotaExceeded { key: String },

    /// The provider itself is not usable (permissions, poisoned lock, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    pub fn read_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ReadFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn write_failed(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::WriteFailed {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
