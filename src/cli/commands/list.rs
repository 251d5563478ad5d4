use chrono::Local;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::{EntryStore, Snapshot};
use crate::errors::{AppError, AppResult};
use crate::models::SavedEntry;
use crate::utils::colors::{dim, error};
use crate::utils::formatting::{format_date, format_duration, format_timestamp, pad_right};
use crate::utils::path::expand_tilde;
use crate::utils::time::minute_aligned;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = EntryStore::open(expand_tilde(&cfg.database))?;
        let snapshot = store.snapshot();
        store.close()?;

        if let Some(msg) = &snapshot.error {
            error(msg);
            return Err(AppError::Other(msg.clone()));
        }

        if *json {
            let out = serde_json::to_string_pretty(&snapshot.entries)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        print_table(&snapshot);
    }

    Ok(())
}

fn print_table(snapshot: &Snapshot) {
    if snapshot.entries.is_empty() {
        println!("No feeds recorded yet.");
        return;
    }

    // Entries are most-recent-first; the head drives the "last feed" line.
    let now = minute_aligned(Local::now());
    let last = &snapshot.entries[0];
    println!(
        "Last feed: {} ago\n",
        format_duration(last.entry.end_timestamp, now)
    );

    println!(
        "{} {} {} {} {} {} {}",
        pad_right("KEY", 5),
        pad_right("DATE", 10),
        pad_right("START", 5),
        pad_right("END", 5),
        pad_right("DURATION", 18),
        pad_right("SIDE", 5),
        pad_right("POSITION", 8),
    );

    for (i, saved) in snapshot.entries.iter().enumerate() {
        print_row(saved);

        // Gap between this feed and the chronologically previous one.
        if let Some(prev) = snapshot.entries.get(i + 1) {
            let gap = format_duration(prev.entry.end_timestamp, saved.entry.start_timestamp);
            println!("{}", dim(format!("      {gap} since previous feed")));
        }
    }
}

fn print_row(saved: &SavedEntry) {
    let e = &saved.entry;
    let position = e.position.map(|p| p.label()).unwrap_or("-");

    println!(
        "{} {} {} {} {} {} {}",
        pad_right(&saved.key.to_string(), 5),
        pad_right(&format_date(e.start_timestamp), 10),
        pad_right(&format_timestamp(e.start_timestamp), 5),
        pad_right(&format_timestamp(e.end_timestamp), 5),
        pad_right(&format_duration(e.start_timestamp, e.end_timestamp), 18),
        pad_right(e.side.label(), 5),
        pad_right(position, 8),
    );
}
