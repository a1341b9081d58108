//! Observability for vld
//!
//! Validation never writes to stdout or stderr. Events go through `tracing`
//! and are dropped unless the host application installs a subscriber.
//!
//! # Levels
//!
//! - WARN: annotation bugs (malformed rules, rules on hidden fields, non-record input)
//! - DEBUG: call start/complete
//! - TRACE: per-field and per-clause detail
//!
//! # Usage
//!
//! ```ignore
//! use vld::observability::{log_event, Event};
//!
//! log_event(Event::FieldRejected, &[("field", "Age")]);
//! ```

mod events;

use tracing::Level;

pub use events::Event;

/// Log a validation event with fields.
///
/// Fields are only rendered when a subscriber accepts the event's level.
pub fn log_event(event: Event, fields: &[(&str, &str)]) {
    if event.is_warning() {
        if tracing::enabled!(target: "vld", Level::WARN) {
            tracing::warn!(target: "vld", kind = event.as_str(), fields = %render_fields(fields));
        }
    } else if event.is_per_field() {
        if tracing::enabled!(target: "vld", Level::TRACE) {
            tracing::trace!(target: "vld", kind = event.as_str(), fields = %render_fields(fields));
        }
    } else if tracing::enabled!(target: "vld", Level::DEBUG) {
        tracing::debug!(target: "vld", kind = event.as_str(), fields = %render_fields(fields));
    }
}

/// Renders fields as `key=value` pairs, sorted by key.
fn render_fields(fields: &[(&str, &str)]) -> String {
    let mut sorted: Vec<_> = fields.iter().collect();
    sorted.sort_by_key(|(k, _)| *k);
    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(" ")
}
