//! WealthMate Core - domain models, the net worth store, and aggregation.
//!
//! This crate is storage-agnostic. It defines the [`KeyValueProvider`] trait
//! that the `wealthmate-storage` crate implements, and owns every read and
//! write of the four persisted collections through [`NetWorthStore`].

pub mod assets;
pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod goals;
pub mod liabilities;
pub mod net_worth;
pub mod storage;
pub mod store;
pub mod utils;

pub use config::StoreConfig;
pub use storage::{KeyValueProvider, LoadFailure, LoadSource, Loaded, WriteOutcome};
pub use store::{Created, NetWorthStore, Removal, UpdateOutcome};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
pub use errors::StorageError;
