use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Rendered in place of a date that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// ISO-like datetimes without an offset, with or without seconds, `T` or
/// space separated.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp as Portway sends it.
///
/// Accepts RFC 3339 (`2024-03-05T17:00:00.000Z`), RFC 2822, an ISO datetime
/// in any of the `NAIVE_FORMATS` optionally suffixed with `Z`, or a bare ISO
/// date. Offset-less inputs are read as UTC.
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive_input = input
        .strip_suffix(|c| c == 'Z' || c == 'z')
        .unwrap_or(input);
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive_input, format).ok())
    {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Format a timestamp string as e.g. `Tue Mar 05 2024`.
pub fn human_readable_date(input: &str) -> String {
    match parse_timestamp(input) {
        Some(dt) => format_date(&dt),
        None => {
            tracing::debug!(input, "Unparseable date");
            INVALID_DATE.to_string()
        }
    }
}

/// Like [`human_readable_date`] for a JSON field value. Numbers are read as
/// milliseconds since the Unix epoch.
pub fn human_readable_date_value(value: &Value) -> String {
    match value {
        Value::String(s) => human_readable_date(s),
        Value::Number(n) => n
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| format_date(&dt))
            .unwrap_or_else(|| INVALID_DATE.to_string()),
        _ => INVALID_DATE.to_string(),
    }
}

fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%a %b %d %Y").to_string()
}
