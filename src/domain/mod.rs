//! Domain layer for the Folio plugin.
//!
//! Core types and pure logic, independent of Zellij and of storage:
//!
//! - [`error`]: error types and result alias
//! - [`project`]: project records and categories
//! - [`catalog`]: catalog sources and the built-in sample catalog
//! - [`pipeline`]: filter/sort/render of the project list
//! - [`contact`]: contact form model and validation
//! - [`page`]: theme mode, sections, greeting, About panels

pub mod catalog;
pub mod contact;
pub mod error;
pub mod page;
pub mod pipeline;
pub mod project;

pub use error::{FolioError, Result};
pub use page::{Section, ThemeMode};
pub use project::{Category, ProjectRecord};
