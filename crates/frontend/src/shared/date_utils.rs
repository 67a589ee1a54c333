//! Utilities for date and time formatting

use chrono::{DateTime, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
///
/// Время показывается в том смещении, в котором пришло, без перевода в локальное.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    // Python isoformat() без смещения
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY_FORMAT).to_string();
    }
    datetime_str.to_string()
}

/// Текущее локальное время в формате DD.MM.YYYY HH:MM:SS
pub fn now_local() -> String {
    chrono::Local::now().format(DISPLAY_FORMAT).to_string()
}
