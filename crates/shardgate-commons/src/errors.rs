//! Client-visible error surface for ShardGate.
//!
//! Every error the DDL planner or the router can raise maps onto a MySQL
//! ERR packet: a message, an errno and a sqlstate. The front-end writes the
//! triple to the wire verbatim; existing clients match on the exact message
//! bytes, so the strings here are contracts.
//!
//! ## Example Usage
//!
//! ```rust
//! use shardgate_commons::errors::SqlError;
//!
//! let err = SqlError::UnknownDatabase("sbtest1".to_string());
//! assert_eq!(err.errno(), 1049);
//! assert_eq!(err.sqlstate(), "42000");
//! assert_eq!(err.to_string(), "Unknown database 'sbtest1'");
//! ```

use std::fmt;

/// Errors surfaced to MySQL clients by the planner and the router.
///
/// `Display` renders the bare message; [`SqlError::wire_format`] appends the
/// `(errno N) (sqlstate S)` suffix the client driver shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    /// No database could be resolved, or the named one does not exist.
    UnknownDatabase(String),

    /// The table is not registered under the resolved database.
    TableDoesntExist(String),

    /// CREATE DATABASE on a name that is already registered.
    DatabaseExists(String),

    /// ALTER TABLE tried to drop the sharding key column.
    DropShardKeyColumn,

    /// ALTER TABLE tried to modify the sharding key column.
    ModifyShardKeyColumn,

    /// A unique/primary constraint was placed on a non-sharding-key column.
    ConstraintNotOnShardKey(String),

    /// PARTITION BY HASH named a column absent from the column list.
    ShardKeyColumnMissing(String),

    /// A constrained table was created without a distribution clause.
    DistributionHintRequired,

    /// CREATE TABLE on a reserved identifier.
    ReservedTableName(String),

    /// CREATE TABLE ... SINGLE.
    SingleTableUnimplemented,

    /// Statement rejected by the DDL grammar.
    SyntaxError(String),

    /// Anything else: backend failures, malformed parse trees.
    Internal(String),
}

impl SqlError {
    /// Creates an internal error from any displayable source.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// MySQL error number for the ERR packet.
    pub fn errno(&self) -> u16 {
        match self {
            SqlError::UnknownDatabase(_) => 1049,
            SqlError::TableDoesntExist(_) => 1146,
            SqlError::DatabaseExists(_) => 1007,
            SqlError::SyntaxError(_) => 1149,
            SqlError::DropShardKeyColumn
            | SqlError::ModifyShardKeyColumn
            | SqlError::ConstraintNotOnShardKey(_)
            | SqlError::ShardKeyColumnMissing(_)
            | SqlError::DistributionHintRequired
            | SqlError::ReservedTableName(_)
            | SqlError::SingleTableUnimplemented
            | SqlError::Internal(_) => 1105,
        }
    }

    /// MySQL sqlstate for the ERR packet.
    pub fn sqlstate(&self) -> &'static str {
        match self {
            SqlError::UnknownDatabase(_) | SqlError::SyntaxError(_) => "42000",
            SqlError::TableDoesntExist(_) => "42S02",
            _ => "HY000",
        }
    }

    /// Renders the error the way MySQL client drivers show it:
    /// `<message> (errno <n>) (sqlstate <s>)`.
    pub fn wire_format(&self) -> String {
        format!("{} (errno {}) (sqlstate {})", self, self.errno(), self.sqlstate())
    }
}

impl fmt::Display for SqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlError::UnknownDatabase(name) => write!(f, "Unknown database '{}'", name),
            SqlError::TableDoesntExist(table) => write!(f, "Table '{}' doesn't exist", table),
            SqlError::DatabaseExists(name) => {
                write!(f, "Can't create database '{}'; database exists", name)
            }
            SqlError::DropShardKeyColumn => {
                write!(f, "unsupported: cannot.drop.the.column.on.shard.key")
            }
            SqlError::ModifyShardKeyColumn => {
                write!(f, "unsupported: cannot.modify.the.column.on.shard.key")
            }
            SqlError::ConstraintNotOnShardKey(shard_key) => write!(
                f,
                "The unique/primary constraint should be only defined on the sharding key column[{}]",
                shard_key
            ),
            SqlError::ShardKeyColumnMissing(column) => write!(
                f,
                "Sharding Key column '{}' doesn't exist in table",
                column
            ),
            // "shoule" is not a typo to fix: clients match on the exact text.
            SqlError::DistributionHintRequired => write!(
                f,
                "The unique/primary constraint shoule be defined or add 'PARTITION BY HASH' to mandatory indication"
            ),
            SqlError::ReservedTableName(table) => write!(
                f,
                "spanner.ddl.check.create.table[{}].error:not support",
                table
            ),
            SqlError::SingleTableUnimplemented => write!(f, "single.table.not.impl.yet"),
            SqlError::SyntaxError(detail) => write!(
                f,
                "You have an error in your SQL syntax; check the manual that corresponds to your MySQL server version for the right syntax to use, {}",
                detail
            ),
            SqlError::Internal(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SqlError {}

/// Result type alias using SqlError.
pub type Result<T> = std::result::Result<T, SqlError>;
