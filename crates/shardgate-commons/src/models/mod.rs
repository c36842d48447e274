//! Type-safe wrapper types for ShardGate identifiers.
//!
//! Newtype wrappers around `String` keep database names, logical/physical
//! table names and backend names from being mixed up at call sites. Unlike
//! generic catalog identifiers, MySQL table rewriting is case-sensitive, so
//! none of these wrappers normalise case.
//!
//! ## Examples
//!
//! ```rust
//! use shardgate_commons::models::{BackendName, DatabaseName, TableName};
//!
//! let db = DatabaseName::new("sbtest");
//! let table = TableName::new("t1_0000");
//! let backend = BackendName::new("backend0");
//!
//! assert_eq!(format!("`{}`.`{}`", db, table), "`sbtest`.`t1_0000`");
//! assert_eq!(backend.as_str(), "backend0");
//! ```

mod backend_name;
mod database_name;
mod table_name;

pub use backend_name::BackendName;
pub use database_name::DatabaseName;
pub use table_name::TableName;
