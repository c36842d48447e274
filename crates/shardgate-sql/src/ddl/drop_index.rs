//! DROP INDEX statement parser
//!
//! Parses SQL statements like:
//! - DROP INDEX index1 ON t1
//! - DROP INDEX index1 ON db1.t1

use crate::ddl::types::TableRef;
use crate::ddl::{parsing, DdlResult};

/// DROP INDEX statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropIndexStatement {
    /// Index name
    pub name: String,

    /// Table the index lives on
    pub table: TableRef,
}

impl DropIndexStatement {
    /// Parse a DROP INDEX statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let trimmed = sql.trim().trim_end_matches(';');
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        if tokens.len() != 5
            || !tokens[0].eq_ignore_ascii_case("DROP")
            || !tokens[1].eq_ignore_ascii_case("INDEX")
            || !tokens[3].eq_ignore_ascii_case("ON")
        {
            return Err("Expected DROP INDEX ... ON ... statement".to_string());
        }

        Ok(Self {
            name: parsing::unquote(tokens[2]).to_string(),
            table: TableRef::parse(tokens[4])?,
        })
    }
}
