//! Key-value providers for WealthMate.
//!
//! This crate implements the `KeyValueProvider` trait defined in
//! `wealthmate-core`:
//! - [`InMemoryKeyValueStore`]: process-local map with an optional byte quota
//! - [`FileKeyValueStore`]: a single JSON document on disk
//!
//! ```text
//! core (NetWorthStore)
//!        │  KeyValueProvider
//!        ▼
//! storage (this crate) ──► memory | JSON file
//! ```

pub mod config;
pub mod errors;
pub mod file;
pub mod memory;

pub use config::FileStoreConfig;
pub use errors::ProviderError;
pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;

// Re-export from wealthmate-core for convenience
pub use wealthmate_core::{Error, KeyValueProvider, Result, StorageError};
