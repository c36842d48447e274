//! Statement-model types shared by the DDL parsers and the planner.

use crate::ddl::{parsing, DdlResult};
use shardgate_commons::models::{DatabaseName, TableName};
use std::fmt;

/// A possibly database-qualified table reference, as written by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Database prefix, when the client wrote `db.table`.
    pub qualifier: Option<DatabaseName>,

    /// Logical table name.
    pub name: TableName,
}

impl TableRef {
    /// Parses a `table` or `db.table` reference, stripping backtick quoting.
    pub fn parse(ident: &str) -> DdlResult<Self> {
        let (qualifier, name) = parsing::split_qualified(ident)?;
        Ok(Self {
            qualifier: qualifier.map(DatabaseName::new),
            name: TableName::new(name),
        })
    }

    /// True when the client wrote a database prefix.
    pub fn is_qualified(&self) -> bool {
        self.qualifier.is_some()
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.qualifier {
            Some(qualifier) => write!(f, "{}.{}", qualifier, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Distribution clause of a CREATE TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DistributionHint {
    /// No trailing distribution clause.
    Unspecified,

    /// `PARTITION BY HASH(<column>)`: hash-sharded on the named column.
    Partitioned(String),

    /// `GLOBAL`: replicated on every backend.
    Global,

    /// `SINGLE`: hosted in full on one backend.
    Single,
}

/// Column-level key option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColKeyOpt {
    None,
    Key,
    Unique,
    UniqueKey,
    Primary,
}

impl ColKeyOpt {
    /// True for every option that creates a uniqueness/index constraint.
    pub fn is_constraint(&self) -> bool {
        !matches!(self, ColKeyOpt::None)
    }
}

/// One column definition of a CREATE TABLE (or ALTER ... ADD/MODIFY COLUMN).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: String,

    /// SQL type as written; the planner never interprets it.
    pub sql_type: String,

    pub key_opt: ColKeyOpt,
}

/// One table-level index or constraint definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDef {
    pub name: String,
    pub columns: Vec<String>,
    pub unique: bool,
    pub primary: bool,
}

/// Column and index definitions of a CREATE TABLE body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableSpec {
    pub columns: Vec<ColumnDef>,
    pub indexes: Vec<IndexDef>,
}

impl TableSpec {
    /// True when `name` appears in the column list.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name == name)
    }

    /// True when any column or index carries a unique/primary/key
    /// constraint.
    pub fn has_constraint(&self) -> bool {
        self.columns.iter().any(|column| column.key_opt.is_constraint())
            || self.indexes.iter().any(|index| index.unique || index.primary)
    }
}
