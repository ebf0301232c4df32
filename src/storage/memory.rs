//! In-memory key-value store.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::BTreeMap;

/// Non-persistent store backed by a map, for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<()> {
        self.items.insert(key.to_string(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}
