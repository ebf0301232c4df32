//! Key-value store abstraction.
//!
//! Folio persists two string-keyed entries (see [`crate::storage::records`]).
//! The [`KeyValueStore`] trait keeps the worker independent of where those
//! strings live: a JSON file in the plugin data directory, or memory in tests.

use crate::domain::error::Result;

/// String-keyed, string-valued persistent store.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): JSON file with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set_item(&mut self, key: &str, value: String) -> Result<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the change cannot be persisted.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
