/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the screens
use chrono::{DateTime, Utc};

/// Format a timestamp as DD.MM.YYYY HH:MM:SS, "-" when absent
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d.%m.%Y %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

/// Format a date as DD.MM.YYYY, "-" when absent
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%d.%m.%Y").to_string(),
        None => "-".to_string(),
    }
}
