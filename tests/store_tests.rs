//! Library-level tests of the entry store against an in-memory database.

use feedlog::db::EntryStore;
use feedlog::errors::AppError;
use feedlog::models::{Entry, Position, Side};

fn entry(start: i64, side: Side, position: Option<Position>) -> Entry {
    Entry {
        start_timestamp: start,
        end_timestamp: start + 1_800,
        side,
        position,
    }
}

#[test]
fn add_then_list_round_trips() {
    let mut store = EntryStore::open_in_memory().unwrap();

    let e = entry(1_614_675_900, Side::Left, Some(Position::Cradle));
    store.add(&e).unwrap();

    let snap = store.snapshot();
    assert!(!snap.loading);
    assert!(snap.error.is_none());
    assert_eq!(snap.entries.len(), 1);

    let saved = &snap.entries[0];
    assert!(saved.key > 0);
    assert_eq!(saved.entry, e);
}

#[test]
fn entries_are_sorted_descending_by_start() {
    let mut store = EntryStore::open_in_memory().unwrap();

    // Insert out of order on purpose.
    for start in [3_600, 10_800, 60, 7_200, 14_400] {
        store
            .add(&entry(1_614_600_000 + start, Side::Left, None))
            .unwrap();
    }

    let snap = store.snapshot();
    assert_eq!(snap.entries.len(), 5);
    for pair in snap.entries.windows(2) {
        assert!(pair[0].entry.start_timestamp > pair[1].entry.start_timestamp);
    }
}

#[test]
fn equal_starts_fall_back_to_descending_key() {
    let mut store = EntryStore::open_in_memory().unwrap();

    store.add(&entry(1_614_600_000, Side::Left, None)).unwrap();
    store.add(&entry(1_614_600_000, Side::Right, None)).unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.entries.len(), 2);
    assert!(snap.entries[0].key > snap.entries[1].key);
}

#[test]
fn update_replaces_payload_at_same_key() {
    let mut store = EntryStore::open_in_memory().unwrap();

    store
        .add(&entry(1_614_600_000, Side::Left, None))
        .unwrap();
    let key = store.snapshot().entries[0].key;

    let replacement = entry(1_614_603_600, Side::Right, Some(Position::Lying));
    store.update(key, &replacement).unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.entries.len(), 1);
    assert_eq!(snap.entries[0].key, key);
    assert_eq!(snap.entries[0].entry, replacement);
}

#[test]
fn update_missing_key_fails() {
    let mut store = EntryStore::open_in_memory().unwrap();

    let err = store
        .update(42, &entry(1_614_600_000, Side::Left, None))
        .unwrap_err();
    assert!(matches!(err, AppError::KeyNotFound(42)));
}

#[test]
fn delete_removes_exactly_one() {
    let mut store = EntryStore::open_in_memory().unwrap();

    store.add(&entry(1_614_600_000, Side::Left, None)).unwrap();
    store.add(&entry(1_614_603_600, Side::Right, None)).unwrap();

    let snap = store.snapshot();
    let victim = snap.entries[0].key;
    store.delete(victim).unwrap();

    let after = store.snapshot();
    assert_eq!(after.entries.len(), snap.entries.len() - 1);
    assert!(after.entries.iter().all(|s| s.key != victim));
}

#[test]
fn delete_missing_key_fails() {
    let mut store = EntryStore::open_in_memory().unwrap();

    let err = store.delete(7).unwrap_err();
    assert!(matches!(err, AppError::KeyNotFound(7)));
}

#[test]
fn deleted_keys_are_never_reused() {
    let mut store = EntryStore::open_in_memory().unwrap();

    store.add(&entry(1_614_600_000, Side::Left, None)).unwrap();
    let first = store.snapshot().entries[0].key;
    store.delete(first).unwrap();

    store.add(&entry(1_614_603_600, Side::Right, None)).unwrap();
    let second = store.snapshot().entries[0].key;
    assert!(second > first);
}

#[test]
fn repeated_refresh_is_idempotent() {
    let mut store = EntryStore::open_in_memory().unwrap();

    store.add(&entry(1_614_600_000, Side::Left, None)).unwrap();
    store.add(&entry(1_614_603_600, Side::Right, Some(Position::Clutch))).unwrap();

    store.refresh();
    let a = store.snapshot();
    store.refresh();
    let b = store.snapshot();

    assert_eq!(a.entries, b.entries);
}

#[test]
fn missing_position_survives_storage() {
    let mut store = EntryStore::open_in_memory().unwrap();

    store.add(&entry(1_614_600_000, Side::Right, None)).unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.entries[0].entry.position, None);
}
