//! In-memory key-value provider.

use std::collections::HashMap;
use std::sync::RwLock;

use wealthmate_core::{KeyValueProvider, Result, StorageError};

use crate::errors::ProviderError;

/// Process-local provider, optionally bounded by a total byte quota
/// (sum of key and value lengths) to mimic browser storage limits.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Bytes currently used by keys and values.
    pub fn used_bytes(&self) -> usize {
        self.values
            .read()
            .map(|values| values.iter().map(|(k, v)| k.len() + v.len()).sum())
            .unwrap_or(0)
    }

    /// Removes a key, as another holder of the same storage might.
    pub fn remove(&self, key: &str) -> Result<Option<String>> {
        let mut values = self
            .values
            .write()
            .map_err(|_| ProviderError::LockPoisoned.on_write(key))?;
        Ok(values.remove(key))
    }
}

impl KeyValueProvider for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|_| ProviderError::LockPoisoned.on_read(key))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|_| ProviderError::LockPoisoned.on_write(key))?;

        if let Some(quota) = self.quota_bytes {
            let others: usize = values
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                }
                .into());
            }
        }

        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
