use serde::{Deserialize, Serialize};

use crate::storage::WriteOutcome;

/// A newly created record and the outcome of persisting it.
///
/// The record is returned even when the write failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Created<T> {
    pub record: T,
    pub write: WriteOutcome,
}

/// Result of a full-record replacement by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "write", rename_all = "camelCase")]
pub enum UpdateOutcome {
    Updated(WriteOutcome),
    /// No record had the id; nothing was written.
    NotFound,
}

/// Result of removing records by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Removal {
    pub removed: usize,
    pub write: WriteOutcome,
}
