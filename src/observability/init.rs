//! Subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::sync::Once;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const TRACE_FILE_NAME: &str = "folio-otlp.json";

const SERVICE_NAME: &str = "Folio";
const DEFAULT_LEVEL: &str = "info";

static WORKER_TRACING: Once = Once::new();

/// Installs the global subscriber for the calling thread's process.
///
/// Failures (no data directory, a subscriber already installed) are
/// swallowed: the plugin runs the same without traces.
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();
}

/// Worker-side initialization; the worker sees no configuration, so it runs
/// at the default level. Only the first call has an effect.
pub fn init_worker_tracing() {
    WORKER_TRACING.call_once(|| init_tracing(&Config::default()));
}
