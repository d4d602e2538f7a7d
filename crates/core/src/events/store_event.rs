//! Store event types.

use serde::{Deserialize, Serialize};

/// The four persisted collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollectionKind {
    Assets,
    Liabilities,
    MonthlyRecords,
    Goals,
}

/// Facts about persisted state changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// This store wrote a collection successfully.
    CollectionChanged { collection: CollectionKind },

    /// Another execution context changed the provider. Carries no payload;
    /// every collection should be re-read.
    ExternalChange,
}
