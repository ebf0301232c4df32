//! Tracing with OTLP-JSON export to a local file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → folio-otlp.json
//! ```
//!
//! The trace file lives in the plugin data directory and rotates at 10 MB,
//! keeping three numbered backups. The filter comes from the `trace_level`
//! configuration option (default `info`).
//!
//! Both the plugin thread and the worker install a subscriber; worker spans
//! join the plugin's trace through the [`TraceContext`](crate::worker::TraceContext)
//! carried on each message.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, init_worker_tracing, TRACE_FILE_NAME};
