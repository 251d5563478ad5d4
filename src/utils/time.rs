//! Timestamp utilities: wall-clock ↔ minute-aligned epoch seconds.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone};

use crate::errors::{AppError, AppResult};

/// Convert a wall-clock datetime to epoch seconds with all sub-minute
/// precision dropped.
pub fn minute_aligned(d: DateTime<Local>) -> i64 {
    let ts = d.timestamp();
    ts - ts.rem_euclid(60)
}

/// Convert an epoch-seconds timestamp back to a local datetime.
pub fn datetime_from_timestamp(ts: i64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(ts, 0).single()
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Compose a local date and an HH:MM time into a minute-aligned timestamp.
/// Fails for wall-clock combinations that do not exist locally (DST gaps).
pub fn timestamp_at(date: NaiveDate, time: NaiveTime) -> AppResult<i64> {
    let local = date
        .and_time(time)
        .and_local_timezone(Local)
        .single()
        .ok_or_else(|| AppError::InvalidTime(format!("{date} {}", time.format("%H:%M"))))?;
    Ok(minute_aligned(local))
}
