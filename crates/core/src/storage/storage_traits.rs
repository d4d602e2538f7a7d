use crate::errors::Result;

/// Persistent string-to-string storage shared by every collection.
///
/// Implementations perform no schema enforcement; values are opaque to them.
/// A `set` replaces the previous value entirely.
pub trait KeyValueProvider: Send + Sync {
    /// Returns the stored value, or `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`. Fails on capacity or permission errors.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
