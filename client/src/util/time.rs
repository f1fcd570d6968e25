//! Clock and date formatting in Bangladesh Standard Time (UTC+6).

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use chrono::{DateTime, FixedOffset, Utc};

const BST_OFFSET_SECS: i32 = 6 * 3600;

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

fn to_bst(ms: i64) -> Option<DateTime<FixedOffset>> {
    let offset = FixedOffset::east_opt(BST_OFFSET_SECS)?;
    DateTime::from_timestamp_millis(ms).map(|dt| dt.with_timezone(&offset))
}

/// `"Sat, 31 Oct 2026"`; empty for out-of-range input.
pub fn format_date(ms: i64) -> String {
    to_bst(ms).map(|dt| dt.format("%a, %d %b %Y").to_string()).unwrap_or_default()
}

/// `"05:00 PM"`; empty for out-of-range input.
pub fn format_time(ms: i64) -> String {
    to_bst(ms).map(|dt| dt.format("%I:%M %p").to_string()).unwrap_or_default()
}

/// `"Sat, 31 Oct 2026 · 05:00 PM – 09:00 PM"`, collapsing the date when the
/// range ends on the same day.
pub fn format_range(start_ms: i64, end_ms: i64) -> String {
    let start_date = format_date(start_ms);
    let end_date = format_date(end_ms);
    if start_date == end_date {
        format!("{start_date} · {} – {}", format_time(start_ms), format_time(end_ms))
    } else {
        format!("{start_date} {} – {end_date} {}", format_time(start_ms), format_time(end_ms))
    }
}
