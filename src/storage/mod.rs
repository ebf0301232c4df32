//! Storage layer for the theme preference and contact submissions.
//!
//! # Modules
//!
//! - `backend`: key-value store trait
//! - `json`: JSON file store in the plugin data directory
//! - `memory`: in-memory store
//! - `records`: typed helpers for the `theme` and `contactSubmissions` keys

pub mod backend;
pub mod json;
pub mod memory;
pub mod records;

pub use backend::KeyValueStore;
pub use json::JsonStore;
pub use memory::MemoryStore;
