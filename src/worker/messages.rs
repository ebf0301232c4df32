//! Plugin ⇄ worker protocol.
//!
//! Everything that blocks (catalog loading, simulated latency, persistence)
//! happens on the worker. Messages travel as JSON and carry the sender's
//! trace context so worker spans join the plugin's trace.

use crate::domain::contact::ContactFields;
use crate::domain::page::ThemeMode;
use crate::domain::project::ProjectRecord;
use serde::{Deserialize, Serialize};

/// Trace and parent span IDs captured on the sending thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID, 32 hex digits.
    pub trace_id: String,

    /// Span ID of the sender, 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current tracing span.
    ///
    /// Returns `None` when no valid span context is active (for example when
    /// tracing is not initialized).
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();
        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

macro_rules! worker_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl WorkerMessage {
            $(
                #[doc = concat!("Builds a `", stringify!($variant), "` message tagged with the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

worker_message_builders! {
    load_catalog(LoadCatalog { catalog_file: Option<String>, delay_ms: u64 }),
    load_theme(LoadTheme {}),
    save_theme(SaveTheme { mode: ThemeMode }),
    submit_contact(SubmitContact { fields: ContactFields, delay_ms: u64 }),
}

/// Requests from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Load the project catalog after waiting `delay_ms`.
    ///
    /// `catalog_file` names a JSON catalog; `None` selects the built-in sample.
    LoadCatalog {
        catalog_file: Option<String>,
        delay_ms: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Read the persisted theme preference.
    LoadTheme {
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Persist a theme preference.
    SaveTheme {
        mode: ThemeMode,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },

    /// Timestamp and append a contact submission after waiting `delay_ms`.
    SubmitContact {
        fields: ContactFields,
        delay_ms: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. }
            | Self::LoadTheme { trace_context }
            | Self::SaveTheme { trace_context, .. }
            | Self::SubmitContact { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Short operation name used for span names and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LoadCatalog { .. } => "load_catalog",
            Self::LoadTheme { .. } => "load_theme",
            Self::SaveTheme { .. } => "save_theme",
            Self::SubmitContact { .. } => "submit_contact",
        }
    }
}

/// Replies from the worker to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The full catalog, in catalog order.
    CatalogLoaded { projects: Vec<ProjectRecord> },

    /// The catalog could not be produced.
    CatalogFailed { message: String },

    /// The stored theme, or `None` when nothing usable is stored.
    ThemeLoaded { mode: Option<ThemeMode> },

    ThemeSaved { mode: ThemeMode },

    /// The submission was appended; `count` is the new list length.
    SubmissionSaved { count: usize },

    SubmissionFailed { message: String },

    /// A request failed in a way that has no dedicated response.
    Error { message: String },
}
