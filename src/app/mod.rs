//! Application layer: state, events, and side effects.
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! - [`actions`]: side effects returned by the handler
//! - [`handler`]: event processing
//! - [`modes`]: input mode, form focus, load status
//! - [`state`]: the state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{ContactFocus, FormStatus, FormStatusKind, InputMode, LoadStatus};
pub use state::{AppState, Latency, Settings};
