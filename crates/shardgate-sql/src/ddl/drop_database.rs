//! DROP DATABASE statement parser
//!
//! Parses SQL statements like:
//! - DROP DATABASE sbtest
//! - DROP DATABASE IF EXISTS sbtest

use crate::ddl::{parsing, DdlResult};
use shardgate_commons::models::DatabaseName;

/// DROP DATABASE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropDatabaseStatement {
    /// Database name to drop
    pub name: DatabaseName,

    /// If true, don't error if the database doesn't exist
    pub if_exists: bool,
}

impl DropDatabaseStatement {
    /// Parse a DROP DATABASE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let (name, if_exists) =
            parsing::parse_create_drop_statement(sql, "DROP DATABASE", "IF EXISTS")?;

        Ok(Self {
            name: DatabaseName::new(parsing::unquote(&name)),
            if_exists,
        })
    }
}
