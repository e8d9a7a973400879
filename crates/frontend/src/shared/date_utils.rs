//! Utilities for date and time formatting
//!
//! Timestamps arrive as ISO 8601 strings; anything unparseable is shown as-is.
use chrono::{DateTime, NaiveDateTime};

/// Format ISO datetime string to `YYYY-MM-DD HH:MM`
/// Example: "2024-03-15T14:02:26.123Z" -> "2024-03-15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    // naive timestamp without an offset
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    datetime_str.to_string()
}
