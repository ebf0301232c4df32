//! Background worker for blocking operations.
//!
//! Catalog loading, simulated network latency, and persistence run on a
//! Zellij worker thread so the plugin's render loop never blocks.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: request processing

pub mod handler;
pub mod messages;

pub use handler::FolioWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};

/// Name used for both the worker registration and its message routing.
pub const WORKER_NAME: &str = "folio";
