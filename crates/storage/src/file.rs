//! JSON-file key-value provider.
//!
//! All keys live in one pretty-printed JSON document. Every `set` rewrites
//! the whole document through a sibling temp file and a rename, so a crash
//! mid-write leaves the previous document intact.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::debug;
use serde::{Deserialize, Serialize};
use wealthmate_core::{KeyValueProvider, Result};

use crate::config::FileStoreConfig;
use crate::errors::ProviderError;

const CURRENT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Default)]
struct StoreDocument {
    version: u32,
    entries: BTreeMap<String, String>,
}

#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &FileStoreConfig) -> Self {
        Self::new(config.path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document_locked(&self) -> std::result::Result<StoreDocument, ProviderError> {
        if !self.path.exists() {
            return Ok(StoreDocument {
                version: CURRENT_VERSION,
                entries: BTreeMap::new(),
            });
        }

        let raw = fs::read(&self.path)?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(StoreDocument {
                version: CURRENT_VERSION,
                entries: BTreeMap::new(),
            });
        }

        let document: StoreDocument = serde_json::from_slice(&raw)?;
        if document.version > CURRENT_VERSION {
            return Err(ProviderError::UnsupportedVersion(document.version));
        }
        Ok(document)
    }

    fn persist_document_locked(
        &self,
        document: &StoreDocument,
    ) -> std::result::Result<(), ProviderError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(document)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl KeyValueProvider for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ProviderError::LockPoisoned.on_read(key))?;
        let document = self.load_document_locked().map_err(|e| e.on_read(key))?;
        Ok(document.entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self
            .lock
            .lock()
            .map_err(|_| ProviderError::LockPoisoned.on_write(key))?;
        let mut document = self.load_document_locked().map_err(|e| e.on_write(key))?;
        document.version = CURRENT_VERSION;
        document.entries.insert(key.to_string(), value.to_string());
        self.persist_document_locked(&document)
            .map_err(|e| e.on_write(key))?;
        debug!("Wrote key {} to {}", key, self.path.display());
        Ok(())
    }
}
