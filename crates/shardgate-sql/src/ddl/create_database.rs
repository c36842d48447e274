//! CREATE DATABASE statement parser
//!
//! Parses SQL statements like:
//! - CREATE DATABASE sbtest
//! - CREATE DATABASE IF NOT EXISTS sbtest

use crate::ddl::{parsing, DdlResult};
use shardgate_commons::models::DatabaseName;

/// CREATE DATABASE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabaseStatement {
    /// Database name to create
    pub name: DatabaseName,

    /// If true, don't error if the database already exists
    pub if_not_exists: bool,
}

impl CreateDatabaseStatement {
    /// Parse a CREATE DATABASE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let (name, if_not_exists) =
            parsing::parse_create_drop_statement(sql, "CREATE DATABASE", "IF NOT EXISTS")?;

        Ok(Self {
            name: DatabaseName::new(parsing::unquote(&name)),
            if_not_exists,
        })
    }
}
