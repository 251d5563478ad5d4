//! The entry store: durable persistence of feeding sessions and an
//! observable, consistently ordered view of the collection.
//!
//! Reads flow one way (store → snapshot → observer) and writes the other
//! (mutation → SQLite → refresh → snapshot). Every mutation triggers a full
//! refresh; there is no incremental patching.

use std::path::Path;

use log::{debug, info};
use rusqlite::{Connection, Row, params};
use tokio::sync::watch;

use crate::db::migrate::run_pending_migrations;
use crate::db::snapshot::Snapshot;
use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Position, SavedEntry, Side};

/// Parse an external string identifier (a route/CLI argument) into an entry
/// key. Yields None rather than an error when the string is not a strictly
/// positive integer; keys start at 1, so "0" does not resolve.
pub fn parse_key(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(k) if k > 0 => Some(k),
        _ => None,
    }
}

fn decode_error(what: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        format!("invalid {what} in database: '{value}'").into(),
    )
}

fn row_to_saved_entry(row: &Row) -> rusqlite::Result<SavedEntry> {
    let side_str: String = row.get("side")?;
    let side = Side::from_db_str(&side_str).ok_or_else(|| decode_error("side", &side_str))?;

    let position = match row.get::<_, Option<String>>("position")? {
        Some(p) => Some(Position::from_db_str(&p).ok_or_else(|| decode_error("position", &p))?),
        None => None,
    };

    Ok(SavedEntry {
        key: row.get("key")?,
        entry: Entry {
            start_timestamp: row.get("start_timestamp")?,
            end_timestamp: row.get("end_timestamp")?,
            side,
            position,
        },
    })
}

/// Owns the SQLite connection and the published snapshot.
///
/// The store is constructed once at startup and closed explicitly; all
/// operations are synchronous over the single connection. Observers hold a
/// `watch::Receiver` and see each published snapshot as an owned value.
pub struct EntryStore {
    conn: Connection,
    refresh_seq: u64,
    tx: watch::Sender<Snapshot>,
}

impl EntryStore {
    /// Open (creating if absent) the database at `path` and publish the
    /// initial snapshot. Open failure is fatal: no store is returned.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn)
    }

    /// In-memory store, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> AppResult<Self> {
        // Durable storage opt-in, once per session, before touching the
        // collection: WAL journaling plus full fsync on commit.
        conn.pragma_update(None, "journal_mode", "wal")?;
        conn.pragma_update(None, "synchronous", "FULL")?;

        run_pending_migrations(&conn)?;

        let (tx, _) = watch::channel(Snapshot::default());
        let mut store = Self {
            conn,
            refresh_seq: 0,
            tx,
        };
        store.refresh();
        Ok(store)
    }

    /// The current snapshot, cloned out of the channel.
    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Observe snapshot updates. Every publish is a whole new value.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Insert a new entry; the store assigns the key. Refreshes the
    /// snapshot on success. No value is returned beyond completion.
    pub fn add(&mut self, entry: &Entry) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO log (start_timestamp, end_timestamp, side, position)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.start_timestamp,
                entry.end_timestamp,
                entry.side.to_db_str(),
                entry.position.map(|p| p.to_db_str()),
            ],
        )?;
        debug!("added entry starting at {}", entry.start_timestamp);
        self.refresh();
        Ok(())
    }

    /// Overwrite the entry at `key` with new field values.
    ///
    /// A missing key fails with [`AppError::KeyNotFound`] rather than
    /// upserting: keys are store-assigned and never reused, so inserting
    /// under a caller-chosen key would break that invariant.
    pub fn update(&mut self, key: i64, entry: &Entry) -> AppResult<()> {
        let changed = self.conn.execute(
            "UPDATE log
             SET start_timestamp = ?1, end_timestamp = ?2, side = ?3, position = ?4
             WHERE key = ?5",
            params![
                entry.start_timestamp,
                entry.end_timestamp,
                entry.side.to_db_str(),
                entry.position.map(|p| p.to_db_str()),
                key,
            ],
        )?;
        if changed == 0 {
            return Err(AppError::KeyNotFound(key));
        }
        debug!("updated entry {key}");
        self.refresh();
        Ok(())
    }

    /// Remove the entry at `key`. The key is permanently retired; the
    /// auto-increment sequence never hands it out again.
    pub fn delete(&mut self, key: i64) -> AppResult<()> {
        let changed = self.conn.execute("DELETE FROM log WHERE key = ?1", [key])?;
        if changed == 0 {
            return Err(AppError::KeyNotFound(key));
        }
        debug!("deleted entry {key}");
        self.refresh();
        Ok(())
    }

    /// Rebuild the snapshot from storage. Read failures are absorbed into
    /// the snapshot's `error` field with the collection treated as empty;
    /// `loading` is cleared on every path.
    pub fn refresh(&mut self) {
        let seq = self.begin_refresh();
        let result = self.load_entries();
        self.finish_refresh(seq, result);
    }

    /// Start a refresh: allocate the next sequence number and publish an
    /// empty loading snapshot.
    pub(crate) fn begin_refresh(&mut self) -> u64 {
        self.refresh_seq += 1;
        let seq = self.refresh_seq;
        debug!("reloading log entries (refresh #{seq})");
        self.tx.send_replace(Snapshot {
            entries: Vec::new(),
            loading: true,
            error: None,
            seq,
        });
        seq
    }

    /// Complete a refresh. Last refresh wins: if a newer refresh has begun
    /// since `seq` was allocated, this result is stale and is dropped.
    pub(crate) fn finish_refresh(&mut self, seq: u64, result: AppResult<Vec<SavedEntry>>) {
        if seq != self.refresh_seq {
            debug!(
                "discarding stale refresh #{seq} (current is #{})",
                self.refresh_seq
            );
            return;
        }

        let snapshot = match result {
            Ok(entries) => {
                info!("loaded {} entries", entries.len());
                Snapshot {
                    entries,
                    loading: false,
                    error: None,
                    seq,
                }
            }
            Err(e) => Snapshot {
                entries: Vec::new(),
                loading: false,
                error: Some(format!("error loading entries: {e}")),
                seq,
            },
        };
        self.tx.send_replace(snapshot);
    }

    /// Scan the `start_timestamp` index in descending order, pairing each
    /// record's key with its entry fields.
    pub(crate) fn load_entries(&self) -> AppResult<Vec<SavedEntry>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT key, start_timestamp, end_timestamp, side, position
             FROM log
             ORDER BY start_timestamp DESC, key DESC",
        )?;
        let rows = stmt.query_map([], row_to_saved_entry)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    /// Explicitly release the underlying connection.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| AppError::Db(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(start: i64) -> Entry {
        Entry {
            start_timestamp: start,
            end_timestamp: start + 600,
            side: Side::Left,
            position: None,
        }
    }

    #[test]
    fn refresh_publishes_loading_then_result() {
        let mut store = EntryStore::open_in_memory().unwrap();
        store.add(&entry(1_600_000_020)).unwrap();

        let seq = store.begin_refresh();
        let during = store.snapshot();
        assert!(during.loading);
        assert!(during.entries.is_empty());

        let loaded = store.load_entries();
        store.finish_refresh(seq, loaded);

        let after = store.snapshot();
        assert!(!after.loading);
        assert_eq!(after.entries.len(), 1);
        assert_eq!(after.seq, seq);
    }

    #[test]
    fn stale_refresh_is_discarded() {
        let mut store = EntryStore::open_in_memory().unwrap();
        store.add(&entry(1_600_000_020)).unwrap();

        let older = store.begin_refresh();
        let older_result = store.load_entries();

        store.add(&entry(1_600_050_000)).unwrap();
        let newer_snapshot = store.snapshot();
        assert_eq!(newer_snapshot.entries.len(), 2);

        // The older refresh completes after the newer one: its single-entry
        // result must not overwrite the two-entry snapshot.
        store.finish_refresh(older, older_result);

        let current = store.snapshot();
        assert_eq!(current.entries.len(), 2);
        assert_eq!(current.seq, newer_snapshot.seq);
        assert_ne!(current.seq, older);
    }

    #[test]
    fn read_failure_is_absorbed_into_error_field() {
        let mut store = EntryStore::open_in_memory().unwrap();
        let seq = store.begin_refresh();
        store.finish_refresh(seq, Err(AppError::Other("disk on fire".into())));

        let snap = store.snapshot();
        assert!(!snap.loading);
        assert!(snap.entries.is_empty());
        let msg = snap.error.expect("error should be set");
        assert!(msg.contains("error loading entries"));
        assert!(msg.contains("disk on fire"));
    }

    #[test]
    fn subscribers_observe_each_publish() {
        let mut store = EntryStore::open_in_memory().unwrap();
        let rx = store.subscribe();

        store.add(&entry(1_600_000_020)).unwrap();

        let seen = rx.borrow().clone();
        assert!(!seen.loading);
        assert_eq!(seen.entries.len(), 1);
    }
}
