//! Price estimate records and the field lists used to dump them.
//!
//! Records stay loosely typed: the API owns the field set, and the dumpers
//! project each record onto a fixed, configured column list.

use chrono::{Local, NaiveDateTime};
use serde_json::{Map, Value};

/// One price estimate, as returned by the API (one per vehicle product).
pub type PriceRecord = Map<String, Value>;

/// Key added by [`add_timestamp`].
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Columns written to CSV output, in order.
pub const ESTIMATE_FIELDS: &[&str] = &[
    "localized_display_name",
    "distance",
    "display_name",
    "product_id",
    "high_estimate",
    "low_estimate",
    "duration",
    "estimate",
    "currency_code",
    TIMESTAMP_FIELD,
];

/// Columns shown in the console table, in order.
pub const DISPLAY_FIELDS: &[&str] = &[
    "display_name",
    "estimate",
    "low_estimate",
    "high_estimate",
    "currency_code",
    "duration",
    "distance",
];

/// Returns copies of `records`, each with a `timestamp` of the current local time.
///
/// The time is read once, so every record in the batch carries the same value.
pub fn add_timestamp(records: &[PriceRecord]) -> Vec<PriceRecord> {
    add_timestamp_at(records, Local::now().naive_local())
}

/// Same as [`add_timestamp`] with an explicit capture time.
pub fn add_timestamp_at(records: &[PriceRecord], captured_at: NaiveDateTime) -> Vec<PriceRecord> {
    let timestamp = Value::String(format_timestamp(captured_at));

    records
        .iter()
        .map(|record| {
            let mut stamped = record.clone();
            stamped.insert(TIMESTAMP_FIELD.to_string(), timestamp.clone());
            stamped
        })
        .collect()
}

/// ISO-8601 without offset, microsecond precision (`2017-05-01T10:20:30.123456`).
pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Renders a single value for display.
///
/// Strings are written raw, numbers and booleans by their JSON text,
/// and null as an empty string.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
