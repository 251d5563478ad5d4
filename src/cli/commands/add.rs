use chrono::Duration;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Position, Side};
use crate::utils::colors::success;
use crate::utils::date;
use crate::utils::formatting::format_duration;
use crate::utils::path::expand_tilde;
use crate::utils::time;

/// Record a new feeding session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        start,
        end,
        end_date,
        side,
        pos,
    } = cmd
    {
        //
        // 1. Parse date (defaults to today)
        //
        let start_date = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        //
        // 2. Parse start and end times (mandatory, HH:MM)
        //
        let start_time =
            time::parse_time(start).ok_or_else(|| AppError::InvalidTime(start.clone()))?;
        let end_time = time::parse_time(end).ok_or_else(|| AppError::InvalidTime(end.clone()))?;

        //
        // 3. Resolve the end date: explicit --end-date wins; otherwise an
        //    end time earlier than the start rolls over to the next day.
        //
        let end_date = match end_date {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None if end_time < start_time => start_date + Duration::days(1),
            None => start_date,
        };

        //
        // 4. Parse side (mandatory) and position (optional)
        //
        let side = Side::from_code(side).ok_or_else(|| {
            AppError::InvalidSide(format!("'{side}'. Use 'left' or 'right'"))
        })?;

        let position = match pos {
            Some(code) => Some(Position::from_code(code).ok_or_else(|| {
                AppError::InvalidPosition(format!(
                    "'{code}'. Use 'cradle', 'clutch', or 'lying'"
                ))
            })?),
            None => None,
        };

        //
        // 5. Compose minute-aligned timestamps and store the entry
        //
        let entry = Entry {
            start_timestamp: time::timestamp_at(start_date, start_time)?,
            end_timestamp: time::timestamp_at(end_date, end_time)?,
            side,
            position,
        };

        let mut store = EntryStore::open(expand_tilde(&cfg.database))?;
        store.add(&entry)?;
        store.close()?;

        success(format!(
            "Recorded a {} feed on the {} side",
            format_duration(entry.start_timestamp, entry.end_timestamp),
            side.label(),
        ));
    }

    Ok(())
}
