//! Filesystem conventions of the Zellij plugin sandbox.

pub mod paths;

pub use paths::{data_dir, expand_tilde, store_file};
