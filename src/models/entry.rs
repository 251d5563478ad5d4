use serde::Serialize;

use crate::models::{Position, Side};

/// One feeding session as captured: start/end instants, side, and an
/// optional nursing position. Timestamps are epoch seconds, minute-aligned
/// at the point of capture. The store enforces no ordering between start
/// and end; a feed may end on a later day and display logic copes with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub start_timestamp: i64,
    pub end_timestamp: i64,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// An [`Entry`] together with its persistent key. The key is assigned by
/// the storage layer on insert, is immutable, and is the sole handle used
/// by update and delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavedEntry {
    pub key: i64,
    #[serde(flatten)]
    pub entry: Entry,
}
