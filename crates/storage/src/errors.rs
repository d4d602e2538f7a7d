//! Provider-specific error types.
//!
//! These wrap `std::io` and `serde_json` failures and are converted to
//! `wealthmate_core::StorageError` before leaving the crate.

use thiserror::Error;
use wealthmate_core::{Error, StorageError};

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed store document: {0}")]
    Document(#[from] serde_json::Error),

    #[error("Unsupported store document version {0}")]
    UnsupportedVersion(u32),

    #[error("Provider lock poisoned")]
    LockPoisoned,
}

impl ProviderError {
    /// Converts into a core error for a failed read of `key`.
    pub fn on_read(self, key: &str) -> Error {
        match self {
            ProviderError::LockPoisoned => {
                StorageError::Unavailable(ProviderError::LockPoisoned.to_string()).into()
            }
            other => StorageError::read_failed(key, other.to_string()).into(),
        }
    }

    /// Converts into a core error for a failed write of `key`.
    pub fn on_write(self, key: &str) -> Error {
        match self {
            ProviderError::LockPoisoned => {
                StorageError::Unavailable(ProviderError::LockPoisoned.to_string()).into()
            }
            other => StorageError::write_failed(key, other.to_string()).into(),
        }
    }
}
