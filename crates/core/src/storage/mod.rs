//! Key-value provider abstraction and the tagged outcomes of store reads/writes.

mod storage_model;
mod storage_traits;

pub use storage_model::{LoadFailure, LoadSource, Loaded, WriteOutcome};
pub use storage_traits::KeyValueProvider;
