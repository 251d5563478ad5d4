//! Formatting utilities for the list output: timestamps, durations, labels.

use crate::utils::time::datetime_from_timestamp;

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

fn count_noun(n: i64, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

/// Render an epoch timestamp as zero-padded HH:MM in 24-hour local time.
pub fn format_timestamp(ts: i64) -> String {
    match datetime_from_timestamp(ts) {
        Some(d) => d.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Render an epoch timestamp as a local date, YYYY-MM-DD.
pub fn format_date(ts: i64) -> String {
    match datetime_from_timestamp(ts) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "----------".to_string(),
    }
}

/// Render the absolute difference between two timestamps as a pluralized
/// duration: "N minute(s)" under an hour, "H hour(s) M minute(s)" above.
/// Singular exactly when the count is 1; zero counts are plural.
pub fn format_duration(start_timestamp: i64, end_timestamp: i64) -> String {
    let minutes = (end_timestamp - start_timestamp).abs() / 60;

    if minutes < 60 {
        return count_noun(minutes, "minute");
    }

    let hours = minutes / 60;
    format!(
        "{} {}",
        count_noun(hours, "hour"),
        count_noun(minutes - 60 * hours, "minute")
    )
}
