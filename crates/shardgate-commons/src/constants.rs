//! Reserved identifiers and sizing constants shared across ShardGate crates.

/// Table name MySQL reserves for the `SELECT ... FROM dual` idiom.
/// CREATE TABLE on this name is rejected by the DDL planner.
pub const RESERVED_TABLE_DUAL: &str = "dual";

/// Size of the hash slot space partitioned tables are sliced over.
/// Every partitioned table owns the full `[0, SLOT_SPACE)` range, split
/// across its physical segments.
pub const SLOT_SPACE: u32 = 4096;

/// Partition count used when a table is registered without an explicit one.
pub const DEFAULT_PARTITIONS: u32 = 64;
