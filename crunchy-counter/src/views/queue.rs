//! Delivery queue helpers

use shared::{OrderSession, SessionStatus};

/// Relative age of a queued order ("Just now", "5m ago", "2h ago", "3d ago")
pub fn time_ago(timestamp: i64) -> String {
    time_ago_at(timestamp, chrono::Utc::now().timestamp_millis())
}

fn time_ago_at(timestamp: i64, now: i64) -> String {
    let seconds = (now - timestamp).max(0) / 1000;
    if seconds < 60 {
        return "Just now".to_string();
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Queue badge label; held orders await confirmation
pub fn status_label(order: &OrderSession) -> &'static str {
    match order.status {
        SessionStatus::Hold => "PENDING CONFIRMATION",
        _ => "IN QUEUE",
    }
}
