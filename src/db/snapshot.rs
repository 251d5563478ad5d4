use serde::Serialize;

use crate::models::SavedEntry;

/// The externally observed state of the entry collection.
///
/// Each refresh publishes a new immutable value; observers never see
/// in-place mutation. `seq` is a monotonic refresh sequence number, which
/// makes the "last refresh wins" rule explicit: a refresh that completes
/// after a newer one has started is discarded instead of overwriting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// All saved entries, sorted descending by start timestamp
    /// (most recent feed first; ties broken by descending key).
    pub entries: Vec<SavedEntry>,
    /// True while a refresh is in flight.
    pub loading: bool,
    /// Human-readable description of the last refresh failure, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub seq: u64,
}
