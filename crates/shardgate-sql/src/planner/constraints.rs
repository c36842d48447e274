//! Sharded-table constraint validation.
//!
//! A partitioned table can only enforce uniqueness locally, per shard, so
//! every unique/primary constraint must sit on exactly the sharding key
//! column. The checks run over columns first, then indexes; the first
//! violation wins.

use crate::ddl::{AlterOperation, TableSpec};
use shardgate_commons::errors::{Result, SqlError};

/// Validates the CREATE TABLE body of a partitioned table against its
/// sharding key.
pub fn check_create_spec(spec: &TableSpec, shard_key: &str) -> Result<()> {
    for column in &spec.columns {
        if column.key_opt.is_constraint() && column.name != shard_key {
            return Err(SqlError::ConstraintNotOnShardKey(shard_key.to_string()));
        }
    }
    for index in &spec.indexes {
        if (index.unique || index.primary)
            && !(index.columns.len() == 1 && index.columns[0] == shard_key)
        {
            return Err(SqlError::ConstraintNotOnShardKey(shard_key.to_string()));
        }
    }
    Ok(())
}

/// Validates an ALTER TABLE delta against the table's sharding key.
///
/// The sharding key column itself can be neither dropped nor modified;
/// added columns and indexes follow the CREATE TABLE rule. Engine and
/// charset changes pass through untouched.
pub fn check_alter(operation: &AlterOperation, shard_key: &str) -> Result<()> {
    match operation {
        AlterOperation::DropColumn(column) if column == shard_key => {
            Err(SqlError::DropShardKeyColumn)
        }
        AlterOperation::ModifyColumn(column) if column.name == shard_key => {
            Err(SqlError::ModifyShardKeyColumn)
        }
        AlterOperation::ModifyColumn(column) if column.key_opt.is_constraint() => {
            Err(SqlError::ConstraintNotOnShardKey(shard_key.to_string()))
        }
        AlterOperation::AddColumns(spec) => check_create_spec(spec, shard_key),
        _ => Ok(()),
    }
}
