//! Distribution catalog entries and physical segment construction.

use shardgate_commons::constants::SLOT_SPACE;
use shardgate_commons::models::{BackendName, TableName};
use std::fmt;

/// Half-open slot range `[lo, hi)` owned by one physical segment of a
/// partitioned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRange {
    pub lo: u32,
    pub hi: u32,
}

impl SlotRange {
    /// True when this range intersects `[lo, hi)`.
    pub fn overlaps(&self, lo: u32, hi: u32) -> bool {
        self.lo < hi && self.hi > lo
    }
}

impl fmt::Display for SlotRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.lo, self.hi)
    }
}

/// One physical table's coordinates: name, hosting backend and, for
/// partitioned tables, the slot range it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub table: TableName,
    pub backend: BackendName,
    pub range: Option<SlotRange>,
}

impl Segment {
    /// Range rendered for the executor contract; empty for non-partitioned
    /// segments.
    pub fn range_token(&self) -> String {
        match self.range {
            Some(range) => range.to_string(),
            None => String::new(),
        }
    }
}

/// Catalog entry for one registered logical table.
#[derive(Debug, Clone)]
pub(crate) struct TableEntry {
    /// `Some` for partitioned tables, `None` for global and single ones.
    pub(crate) shard_key: Option<String>,
    pub(crate) segments: Vec<Segment>,
}

/// Slices the slot space into `partitions` physical segments named
/// `<table>_NNNN`, assigned round-robin over the backend list.
pub(crate) fn hash_segments(
    table: &str,
    backends: &[BackendName],
    partitions: u32,
) -> Vec<Segment> {
    let step = SLOT_SPACE / partitions;
    (0..partitions)
        .map(|i| {
            let lo = i * step;
            // The last segment absorbs the remainder of the slot space.
            let hi = if i == partitions - 1 { SLOT_SPACE } else { (i + 1) * step };
            Segment {
                table: TableName::new(format!("{}_{:04}", table, i)),
                backend: backends[i as usize % backends.len()].clone(),
                range: Some(SlotRange { lo, hi }),
            }
        })
        .collect()
}

/// One segment per backend, physical name equal to the logical name.
pub(crate) fn global_segments(table: &str, backends: &[BackendName]) -> Vec<Segment> {
    backends
        .iter()
        .map(|backend| Segment {
            table: TableName::new(table),
            backend: backend.clone(),
            range: None,
        })
        .collect()
}

/// Single tables live in full on the first configured backend.
pub(crate) fn single_segment(table: &str, backends: &[BackendName]) -> Vec<Segment> {
    vec![Segment {
        table: TableName::new(table),
        backend: backends[0].clone(),
        range: None,
    }]
}
