//! OTLP-JSON serialization of span batches.
//!
//! One batch becomes one `resourceSpans` document:
//!
//! ```json
//! {"resourceSpans":[{"resource":{"attributes":[...]},
//!   "scopeSpans":[{"scope":{"name":"Folio"},"spans":[...]}]}]}
//! ```

use opentelemetry::trace::{Event, Link, SpanId, SpanKind, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use opentelemetry_sdk::resource::Resource;
use serde_json::{json, Value as JsonValue};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct SpanFormatter {
    resource: Resource,
    scope: String,
}

impl SpanFormatter {
    pub fn new(resource: Resource, scope: &str) -> Self {
        Self {
            resource,
            scope: scope.to_string(),
        }
    }

    pub fn set_resource(&mut self, resource: Resource) {
        self.resource = resource;
    }

    pub fn format_batch(&self, batch: &[SpanData]) -> JsonValue {
        let resource_attrs: Vec<JsonValue> = self
            .resource
            .iter()
            .map(|(key, value)| attribute(key.as_str(), value))
            .collect();
        let spans: Vec<JsonValue> = batch.iter().map(format_span).collect();

        json!({
            "resourceSpans": [{
                "resource": { "attributes": resource_attrs },
                "scopeSpans": [{
                    "scope": { "name": self.scope },
                    "spans": spans,
                }],
            }],
        })
    }
}

impl std::fmt::Debug for SpanFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanFormatter").field("scope", &self.scope).finish_non_exhaustive()
    }
}

fn format_span(span: &SpanData) -> JsonValue {
    let parent = if span.parent_span_id == SpanId::INVALID {
        String::new()
    } else {
        format!("{:016x}", span.parent_span_id)
    };
    let (code, message) = match &span.status {
        Status::Unset => (0, String::new()),
        Status::Ok => (1, String::new()),
        Status::Error { description } => (2, description.to_string()),
    };

    json!({
        "traceId": format!("{:032x}", span.span_context.trace_id()),
        "spanId": format!("{:016x}", span.span_context.span_id()),
        "parentSpanId": parent,
        "name": span.name,
        "kind": kind_code(&span.span_kind),
        "startTimeUnixNano": nanos(span.start_time),
        "endTimeUnixNano": nanos(span.end_time),
        "attributes": attributes(&span.attributes),
        "events": span.events.iter().map(format_event).collect::<Vec<_>>(),
        "links": span.links.iter().map(format_link).collect::<Vec<_>>(),
        "status": { "code": code, "message": message },
    })
}

fn format_event(event: &Event) -> JsonValue {
    json!({
        "timeUnixNano": nanos(event.timestamp),
        "name": event.name,
        "attributes": attributes(&event.attributes),
    })
}

fn format_link(link: &Link) -> JsonValue {
    json!({
        "traceId": format!("{:032x}", link.span_context.trace_id()),
        "spanId": format!("{:016x}", link.span_context.span_id()),
        "attributes": attributes(&link.attributes),
    })
}

const fn kind_code(kind: &SpanKind) -> u8 {
    match kind {
        SpanKind::Internal => 1,
        SpanKind::Server => 2,
        SpanKind::Client => 3,
        SpanKind::Producer => 4,
        SpanKind::Consumer => 5,
    }
}

/// Nanoseconds since the epoch as a decimal string, OTLP's int64 encoding.
fn nanos(time: SystemTime) -> String {
    time.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_nanos()).to_string()
}

fn attributes(pairs: &[KeyValue]) -> Vec<JsonValue> {
    pairs.iter().map(|kv| attribute(kv.key.as_str(), &kv.value)).collect()
}

fn attribute(key: &str, value: &Value) -> JsonValue {
    let value = match value {
        Value::Bool(b) => json!({ "boolValue": b }),
        Value::I64(i) => json!({ "intValue": i.to_string() }),
        Value::F64(f) => json!({ "doubleValue": f }),
        Value::String(s) => json!({ "stringValue": s.as_str() }),
        Value::Array(_) => json!({ "stringValue": value.to_string() }),
    };
    json!({ "key": key, "value": value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_carries_resource_and_scope() {
        let resource = Resource::new(vec![KeyValue::new("service.name", "Folio")]);
        let doc = SpanFormatter::new(resource, "Folio").format_batch(&[]);

        let group = &doc["resourceSpans"][0];
        let attrs = group["resource"]["attributes"].as_array().unwrap();
        assert!(attrs
            .iter()
            .any(|a| a["key"] == "service.name" && a["value"]["stringValue"] == "Folio"));
        assert_eq!(group["scopeSpans"][0]["scope"]["name"], "Folio");
        assert_eq!(group["scopeSpans"][0]["spans"], json!([]));
    }

    #[test]
    fn attribute_values_use_otlp_encodings() {
        assert_eq!(attribute("n", &Value::I64(7)), json!({"key": "n", "value": {"intValue": "7"}}));
        assert_eq!(
            attribute("ok", &Value::Bool(true)),
            json!({"key": "ok", "value": {"boolValue": true}})
        );
    }

    #[test]
    fn pre_epoch_times_clamp_to_zero() {
        assert_eq!(nanos(UNIX_EPOCH), "0");
    }
}
