//! Shared foundations for the ShardGate sharding proxy.
//!
//! This crate holds the pieces every other ShardGate crate agrees on:
//! - type-safe identifier wrappers (`DatabaseName`, `TableName`, `BackendName`),
//! - the client-visible SQL error surface (`SqlError`) with MySQL
//!   errno/sqlstate mapping,
//! - the contract handed to the scatter executor (`RequestMode`, `QueryTuple`),
//! - reserved identifiers and sizing constants.
//!
//! It deliberately carries no heavyweight dependencies; `serde` support is
//! behind the optional `serde` feature.

pub mod constants;
pub mod errors;
pub mod execution;
pub mod models;

pub use errors::{Result, SqlError};
pub use execution::{QueryTuple, RequestMode};
pub use models::{BackendName, DatabaseName, TableName};
