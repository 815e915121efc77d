//! Display helpers for timestamps and durations

use chrono::{DateTime, Duration, Local, Utc};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a UTC instant in the local timezone.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
}

/// Render a duration as `"H hours M minutes"`. Negative input renders as zero.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);
    format!("{} hours {} minutes", total_minutes / 60, total_minutes % 60)
}
