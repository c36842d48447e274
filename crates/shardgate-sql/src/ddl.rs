//! DDL statement definitions for the ShardGate planner.
//!
//! Each statement kind gets its own parser module. The grammar is
//! deliberately shallow: database and table references plus the shape bits
//! the planner validates. Trailing clauses (engine, charset, partition
//! expressions) stay untouched in the raw text and survive rewriting
//! verbatim.

pub mod parsing;
pub mod types;

pub mod alter_table;
pub mod create_database;
pub mod create_index;
pub mod create_table;
pub mod drop_database;
pub mod drop_index;
pub mod drop_table;
pub mod truncate_table;

/// Result type used by the DDL parsers.
/// Returns String errors so parsers stay dependency-free; the classifier
/// wraps them into the client-visible syntax error.
pub type DdlResult<T> = Result<T, String>;

pub use alter_table::{AlterOperation, AlterTableStatement};
pub use create_database::CreateDatabaseStatement;
pub use create_index::CreateIndexStatement;
pub use create_table::CreateTableStatement;
pub use drop_database::DropDatabaseStatement;
pub use drop_index::DropIndexStatement;
pub use drop_table::DropTableStatement;
pub use truncate_table::TruncateTableStatement;
pub use types::{ColKeyOpt, ColumnDef, DistributionHint, IndexDef, TableRef, TableSpec};
