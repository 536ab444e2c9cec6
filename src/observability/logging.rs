//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Format every event as one JSON object per line on stdout
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging throughout
//! - The record shape is fixed: `ts` (ISO-8601 UTC), `level`, `event`,
//!   then the event-specific fields in call-site order
//! - Log level configurable via RUST_LOG, default info

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Number, Value};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Install the subscriber. Call once, before any event is emitted.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(JsonLineFormat)
        .init();
}

/// Formats one event as `{"ts": ..., "level": ..., "event": ..., ...}`.
pub struct JsonLineFormat;

impl<S, N> FormatEvent<S, N> for JsonLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);

        let mut record = Map::new();
        record.insert(
            "ts".to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        record.insert(
            "level".to_string(),
            Value::String(level_label(*event.metadata().level()).to_string()),
        );
        if let Some(name) = collector.event_name {
            record.insert("event".to_string(), name);
        }
        for (key, value) in collector.fields {
            record.insert(key, value);
        }

        writeln!(writer, "{}", Value::Object(record))
    }
}

fn level_label(level: Level) -> &'static str {
    match level {
        Level::ERROR => "error",
        Level::WARN => "warn",
        Level::INFO => "info",
        Level::DEBUG => "debug",
        Level::TRACE => "trace",
    }
}

/// Collects an event's fields into JSON values, pulling the `event` name
/// out of the envelope.
#[derive(Default)]
struct FieldCollector {
    event_name: Option<Value>,
    fields: Vec<(String, Value)>,
}

impl FieldCollector {
    fn push(&mut self, field: &Field, value: Value) {
        if field.name() == "event" {
            self.event_name = Some(value);
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, Value::String(value.to_string()));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::Number(Number::from(value)));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::Number(Number::from(value)));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match Number::from_f64(value) {
            Some(number) => self.push(field, Value::Number(number)),
            None => self.push(field, Value::String(value.to_string())),
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.push(field, Value::String(value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        // Display-recorded values (`%`) arrive here with their Display text.
        self.push(field, Value::String(format!("{:?}", value)));
    }
}
