//! Polars AnyValue display helpers.

use polars::prelude::*;

/// Converts a Polars AnyValue to display text.
///
/// Nulls become the empty string; floats lose trailing zeros.
pub fn any_to_string(value: &AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(*v)),
        AnyValue::Float64(v) => format_numeric(*v),
        AnyValue::String(s) => (*s).to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
        AnyValue::Date(days) => format_date(*days),
        other => other.to_string(),
    }
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn format_date(days_since_epoch: i32) -> String {
    let epoch = chrono::NaiveDate::default();
    let date = epoch + chrono::Duration::days(i64::from(days_since_epoch));
    date.format("%Y-%m-%d").to_string()
}
