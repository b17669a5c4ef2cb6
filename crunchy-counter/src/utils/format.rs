//! Display formatting helpers

use chrono::{DateTime, Local};

fn local_datetime(timestamp: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_millis(timestamp).map(|dt| dt.with_timezone(&Local))
}

/// "₹149.00"
pub fn format_currency(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// "14:05"
pub fn format_time(timestamp: i64) -> String {
    local_datetime(timestamp)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}

/// "Aug 5, 2026"
pub fn format_date(timestamp: i64) -> String {
    local_datetime(timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// "Aug 5, 14:05"
pub fn format_date_time(timestamp: i64) -> String {
    local_datetime(timestamp)
        .map(|dt| dt.format("%b %-d, %H:%M").to_string())
        .unwrap_or_else(|| "--".to_string())
}

/// Zero-padded quantity: "02"
pub fn format_quantity(quantity: i32) -> String {
    format!("{:02}", quantity)
}
