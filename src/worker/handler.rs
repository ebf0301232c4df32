//! Worker-side request processing.
//!
//! [`FolioWorker`] owns the key-value store and answers [`WorkerMessage`]s.
//! It is deliberately free of Zellij types; the plugin binary wraps it in a
//! `ZellijWorker` and forwards payloads through [`FolioWorker::handle_payload`].

use crate::domain::catalog::{CatalogSource, JsonFileCatalog, SampleCatalog};
use crate::domain::contact::{ContactFields, ContactSubmission};
use crate::domain::error::{FolioError, Result};
use crate::domain::page::ThemeMode;
use crate::infrastructure::paths;
use crate::storage::backend::KeyValueStore;
use crate::storage::{records, JsonStore};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Worker thread state.
///
/// The store is opened lazily on the first request that needs it. If opening
/// fails, the failure is reported per request and retried on the next one.
#[derive(Serialize, Deserialize, Default)]
pub struct FolioWorker {
    #[serde(skip)]
    store: Option<Box<dyn KeyValueStore>>,
}

impl FolioWorker {
    /// Creates a worker around an already-open store.
    #[must_use]
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self { store: Some(store) }
    }

    fn store(&mut self) -> Result<&mut Box<dyn KeyValueStore>> {
        if self.store.is_none() {
            let path = paths::store_file();
            tracing::debug!(path = ?path, "opening store");
            self.store = Some(Box::new(JsonStore::open(path)?));
        }

        self.store
            .as_mut()
            .ok_or_else(|| FolioError::Worker("store not initialized".to_string()))
    }

    fn simulate_latency(delay_ms: u64) {
        if delay_ms > 0 {
            tracing::debug!(delay_ms, "simulating latency");
            std::thread::sleep(Duration::from_millis(delay_ms));
        }
    }

    fn catalog_source(catalog_file: Option<&str>) -> Box<dyn CatalogSource> {
        match catalog_file {
            Some(file) => Box::new(JsonFileCatalog::new(PathBuf::from(file))),
            None => Box::new(SampleCatalog),
        }
    }

    fn handle_load_catalog(catalog_file: Option<&str>, delay_ms: u64) -> WorkerResponse {
        Self::simulate_latency(delay_ms);

        match Self::catalog_source(catalog_file).load() {
            Ok(projects) => {
                tracing::info!(project_count = projects.len(), "catalog loaded");
                WorkerResponse::CatalogLoaded { projects }
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                WorkerResponse::CatalogFailed { message: e.to_string() }
            }
        }
    }

    fn handle_load_theme(&mut self) -> WorkerResponse {
        let mode = self
            .store()
            .and_then(|store| records::load_theme(&**store))
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "theme preference unavailable");
                None
            });

        tracing::debug!(mode = ?mode, "theme preference read");
        WorkerResponse::ThemeLoaded { mode }
    }

    fn handle_save_theme(&mut self, mode: ThemeMode) -> WorkerResponse {
        match self.store().and_then(|store| records::save_theme(&mut **store, mode)) {
            Ok(()) => {
                tracing::debug!(mode = mode.as_str(), "theme preference saved");
                WorkerResponse::ThemeSaved { mode }
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save theme preference");
                WorkerResponse::Error {
                    message: format!("save theme: {e}"),
                }
            }
        }
    }

    fn handle_submit_contact(&mut self, fields: ContactFields, delay_ms: u64) -> WorkerResponse {
        Self::simulate_latency(delay_ms);

        let submission = ContactSubmission::now(fields);
        match self
            .store()
            .and_then(|store| records::append_submission(&mut **store, submission))
        {
            Ok(count) => {
                tracing::info!(count, "contact submission saved");
                WorkerResponse::SubmissionSaved { count }
            }
            Err(e) => {
                tracing::warn!(error = %e, "contact submission failed");
                WorkerResponse::SubmissionFailed { message: e.to_string() }
            }
        }
    }

    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());
        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes one request and returns its response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let span = tracing::debug_span!("worker_handle_message", message_type = message.kind());
        let _guard = span.entered();

        match message {
            WorkerMessage::LoadCatalog {
                catalog_file, delay_ms, ..
            } => Self::handle_load_catalog(catalog_file.as_deref(), delay_ms),
            WorkerMessage::LoadTheme { .. } => self.handle_load_theme(),
            WorkerMessage::SaveTheme { mode, .. } => self.handle_save_theme(mode),
            WorkerMessage::SubmitContact { fields, delay_ms, .. } => self.handle_submit_contact(fields, delay_ms),
        }
    }

    /// Decodes a JSON request, handles it, and encodes the response.
    ///
    /// Returns `None` only when the response cannot be serialized. An
    /// undecodable request is answered with [`WorkerResponse::Error`].
    pub fn handle_payload(&mut self, payload: &str) -> Option<String> {
        let response = match serde_json::from_str::<WorkerMessage>(payload) {
            Ok(message) => self.handle_message(message),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed request: {e}"),
                }
            }
        };

        serde_json::to_string(&response)
            .map_err(|e| tracing::error!(error = %e, "failed to serialize worker response"))
            .ok()
    }
}
