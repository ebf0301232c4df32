//! Tracer provider backed by a span exporter that appends to a file.

use super::file_writer::RotatingFile;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes each exported batch as one OTLP-JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.file
            .append_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.formatter.set_resource(resource.clone());
    }
}

/// Provider exporting synchronously to `file_path`; spans are written as soon
/// as they close.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource, scope: &str) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path),
        formatter: SpanFormatter::new(resource.clone(), scope),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
