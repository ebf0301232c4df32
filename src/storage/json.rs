//! JSON file-backed key-value store.
//!
//! The whole store is one small JSON document kept in memory and rewritten on
//! every change using write-to-temp + rename, so a crash never leaves a
//! half-written file behind.

use crate::domain::error::{FolioError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container.
///
/// ```json
/// {
///   "version": 1,
///   "items": {
///     "theme": "dark",
///     "contactSubmissions": "[{\"name\":\"Jo\",...}]"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    items: BTreeMap<String, String>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: 1,
            items: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// `Send` but not `Sync`; owned by the single worker thread.
pub struct JsonStore {
    file_path: PathBuf,
    data: StoreFile,
    dirty: bool,
}

impl JsonStore {
    /// Opens the store at `file_path`, creating parent directories. A missing
    /// file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an existing
    /// file cannot be read or parsed.
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::read_file(&file_path)?
        } else {
            tracing::debug!("no store file yet, starting empty");
            StoreFile::default()
        };

        tracing::debug!(item_count = data.items.len(), "store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn read_file(path: &Path) -> Result<StoreFile> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreFile = serde_json::from_str(&contents)
            .map_err(|e| FolioError::Storage(format!("failed to parse store file: {e}")))?;

        tracing::debug!(version = data.version, items = data.items.len(), "store file read");
        Ok(data)
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| FolioError::Storage(format!("failed to serialize store: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store flushed");
        Ok(())
    }

    /// Flushes a single-key change, putting `previous` back if the write
    /// fails so an unsaved value is never persisted by a later flush.
    fn flush_or_restore(&mut self, key: &str, previous: Option<String>) -> Result<()> {
        let result = self.flush();
        if let Err(e) = &result {
            tracing::warn!(error = %e, key = %key, "store write failed, restoring previous value");
            match previous {
                Some(value) => self.data.items.insert(key.to_string(), value),
                None => self.data.items.remove(key),
            };
            self.dirty = false;
        }
        result
    }
}

impl KeyValueStore for JsonStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        let _span = tracing::debug_span!("json_set_item", key = %key, value_len = value.len()).entered();

        let previous = self.data.items.insert(key.to_string(), value);
        self.dirty = true;
        self.flush_or_restore(key, previous)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_item", key = %key).entered();

        let previous = self.data.items.remove(key);
        if previous.is_some() {
            self.dirty = true;
        }
        self.flush_or_restore(key, previous)
    }
}

impl Drop for JsonStore {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            tracing::error!(error = %e, "failed to flush store on drop");
        }
    }
}
