//! TRUNCATE TABLE statement parser
//!
//! Parses SQL statements like:
//! - TRUNCATE TABLE t1
//! - TRUNCATE TABLE db1.t1

use crate::ddl::types::TableRef;
use crate::ddl::DdlResult;

/// TRUNCATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncateTableStatement {
    /// Table to truncate
    pub table: TableRef,
}

impl TruncateTableStatement {
    /// Parse a TRUNCATE TABLE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let trimmed = sql.trim().trim_end_matches(';');
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        if tokens.len() != 3
            || !tokens[0].eq_ignore_ascii_case("TRUNCATE")
            || !tokens[1].eq_ignore_ascii_case("TABLE")
        {
            return Err("Expected TRUNCATE TABLE statement".to_string());
        }

        Ok(Self {
            table: TableRef::parse(tokens[2])?,
        })
    }
}
