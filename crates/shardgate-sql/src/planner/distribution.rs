//! Distribution classification for CREATE TABLE.
//!
//! Maps the statement's trailing distribution clause plus the table shape to
//! a distribution, and rejects the combinations the proxy cannot honour.

use crate::ddl::{CreateTableStatement, DistributionHint};
use shardgate_commons::constants::RESERVED_TABLE_DUAL;
use shardgate_commons::errors::{Result, SqlError};

/// Distribution a CREATE TABLE resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableDistribution {
    /// Hash-sharded on the named column.
    Partitioned { shard_key: String },

    /// Replicated on every backend.
    Global,
}

/// Classifies a CREATE TABLE statement.
///
/// Rules:
/// - the reserved table name `dual` is rejected outright;
/// - `PARTITION BY HASH(col)` requires `col` to exist in the column list;
/// - `SINGLE` is not implemented;
/// - without a clause, a table carrying any unique/primary/key constraint
///   is rejected, and an unconstrained table becomes an implicit global
///   table.
pub fn classify_create(statement: &CreateTableStatement) -> Result<TableDistribution> {
    let table = statement.table.name.as_str();
    if table == RESERVED_TABLE_DUAL {
        return Err(SqlError::ReservedTableName(table.to_string()));
    }

    match &statement.hint {
        DistributionHint::Partitioned(column) => {
            if !statement.spec.has_column(column) {
                return Err(SqlError::ShardKeyColumnMissing(column.clone()));
            }
            Ok(TableDistribution::Partitioned {
                shard_key: column.clone(),
            })
        }
        DistributionHint::Global => Ok(TableDistribution::Global),
        DistributionHint::Single => Err(SqlError::SingleTableUnimplemented),
        DistributionHint::Unspecified => {
            if statement.spec.has_constraint() {
                Err(SqlError::DistributionHintRequired)
            } else {
                Ok(TableDistribution::Global)
            }
        }
    }
}
