use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{EntryStore, parse_key};
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Position, Side};
use crate::utils::colors::success;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use crate::utils::time;

/// Edit an existing feeding session. Fields not given on the command line
/// keep their stored values; the whole record is rewritten under its key.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        key: key_str,
        date: date_str,
        start,
        end,
        side,
        pos,
        no_pos,
    } = cmd
    {
        let key = parse_key(key_str).ok_or_else(|| AppError::InvalidKey(key_str.clone()))?;

        let mut store = EntryStore::open(expand_tilde(&cfg.database))?;

        let current = store
            .snapshot()
            .entries
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.entry)
            .ok_or(AppError::KeyNotFound(key))?;

        let entry = apply_changes(
            &current,
            date_str.as_deref(),
            start.as_deref(),
            end.as_deref(),
            side.as_deref(),
            pos.as_deref(),
            *no_pos,
        )?;

        store.update(key, &entry)?;
        store.close()?;

        success(format!("Entry {key} updated"));
    }

    Ok(())
}

fn apply_changes(
    current: &Entry,
    date_str: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
    side: Option<&str>,
    pos: Option<&str>,
    no_pos: bool,
) -> AppResult<Entry> {
    let mut entry = *current;

    // Times are re-composed against the (possibly new) date; a bare --date
    // shifts both start and end to that day keeping their wall-clock times.
    let new_date = match date_str {
        Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?),
        None => None,
    };

    if new_date.is_some() || start.is_some() {
        let d = match new_date {
            Some(d) => d,
            None => time::datetime_from_timestamp(entry.start_timestamp)
                .ok_or_else(|| AppError::InvalidTime(entry.start_timestamp.to_string()))?
                .date_naive(),
        };
        let t = match start {
            Some(s) => time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.into()))?,
            None => time::datetime_from_timestamp(entry.start_timestamp)
                .ok_or_else(|| AppError::InvalidTime(entry.start_timestamp.to_string()))?
                .time(),
        };
        entry.start_timestamp = time::timestamp_at(d, t)?;
    }

    if new_date.is_some() || end.is_some() {
        let d = match new_date {
            Some(d) => d,
            None => time::datetime_from_timestamp(entry.end_timestamp)
                .ok_or_else(|| AppError::InvalidTime(entry.end_timestamp.to_string()))?
                .date_naive(),
        };
        let t = match end {
            Some(s) => time::parse_time(s).ok_or_else(|| AppError::InvalidTime(s.into()))?,
            None => time::datetime_from_timestamp(entry.end_timestamp)
                .ok_or_else(|| AppError::InvalidTime(entry.end_timestamp.to_string()))?
                .time(),
        };
        entry.end_timestamp = time::timestamp_at(d, t)?;
    }

    if let Some(code) = side {
        entry.side = Side::from_code(code)
            .ok_or_else(|| AppError::InvalidSide(format!("'{code}'. Use 'left' or 'right'")))?;
    }

    if no_pos {
        entry.position = None;
    } else if let Some(code) = pos {
        entry.position = Some(Position::from_code(code).ok_or_else(|| {
            AppError::InvalidPosition(format!("'{code}'. Use 'cradle', 'clutch', or 'lying'"))
        })?);
    }

    Ok(entry)
}
