//! Outcome types returned by the net worth store.

use serde::{Deserialize, Serialize};

/// Why a stored collection could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum LoadFailure {
    /// The provider returned an error for the key.
    Unreadable(String),
    /// A value exists but is not a valid collection.
    Malformed(String),
}

/// Where the items of a [`Loaded`] collection came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoadSource {
    /// Deserialized from the provider.
    Stored,
    /// Nothing was stored yet; built-in defaults were returned.
    Seeded,
    /// The stored value was unusable; built-in defaults were returned.
    Recovered { failure: LoadFailure },
}

/// A collection read together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub source: LoadSource,
}

impl<T> Loaded<T> {
    pub fn is_fallback(&self) -> bool {
        !matches!(self.source, LoadSource::Stored)
    }
}

/// Result of writing a full collection back to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "camelCase")]
pub enum WriteOutcome {
    Written,
    Failed(String),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written)
    }
}
