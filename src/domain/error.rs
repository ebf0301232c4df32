//! Error types for the Folio plugin.
//!
//! This module defines the crate-wide error type [`FolioError`] and the
//! [`Result`] alias used by every fallible operation. Per-field form
//! validation failures live in [`crate::domain::contact::ValidationError`]
//! because they are displayed inline rather than propagated.

use thiserror::Error;

/// The main error type for Folio operations.
///
/// Every variant is recoverable: the worker turns them into failure responses
/// and the event handler turns those into user-visible state.
///
/// # Examples
///
/// ```rust
/// use folio::domain::FolioError;
///
/// fn fetch() -> Result<(), FolioError> {
///     Err(FolioError::Load("catalog file not found".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum FolioError {
    /// Reading from or writing to the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The project catalog could not be loaded.
    ///
    /// Raised for missing or malformed catalog sources and for catalogs that
    /// violate the unique-id invariant.
    #[error("Catalog load error: {0}")]
    Load(String),

    /// A contact form submission could not be recorded.
    #[error("Submission error: {0}")]
    Submission(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Folio operations.
pub type Result<T> = std::result::Result<T, FolioError>;
