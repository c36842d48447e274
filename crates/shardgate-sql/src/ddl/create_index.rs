//! CREATE INDEX statement parser
//!
//! Parses SQL statements like:
//! - CREATE INDEX index1 ON t1(a, b)
//! - CREATE FULLTEXT INDEX fts1 ON t1(a)

use crate::ddl::types::TableRef;
use crate::ddl::{parsing, DdlResult};
use once_cell::sync::Lazy;
use regex::Regex;

static CREATE_INDEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*CREATE\s+(FULLTEXT\s+)?INDEX\s+(\S+)\s+ON\s+([^\s(]+)\s*\(([^)]*)\)\s*$")
        .expect("create index pattern")
});

/// CREATE [FULLTEXT] INDEX statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateIndexStatement {
    /// Index name
    pub name: String,

    /// Table the index is created on
    pub table: TableRef,

    /// Indexed columns, in client order
    pub columns: Vec<String>,

    /// True for CREATE FULLTEXT INDEX
    pub fulltext: bool,
}

impl CreateIndexStatement {
    /// Parse a CREATE [FULLTEXT] INDEX statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let trimmed = sql.trim().trim_end_matches(';');
        let Some(caps) = CREATE_INDEX_RE.captures(trimmed) else {
            return Err("Expected CREATE [FULLTEXT] INDEX ... ON ... statement".to_string());
        };

        let fulltext = caps.get(1).is_some();
        let name = parsing::unquote(&caps[2]).to_string();
        let table = TableRef::parse(&caps[3])?;
        let columns: Vec<String> = caps[4]
            .split(',')
            .map(|column| parsing::unquote(column.trim()).to_string())
            .filter(|column| !column.is_empty())
            .collect();
        if columns.is_empty() {
            return Err("Index column list cannot be empty".to_string());
        }

        Ok(Self {
            name,
            table,
            columns,
            fulltext,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_index() {
        let stmt = CreateIndexStatement::parse("create index index1 on t1(a,b)").unwrap();
        assert_eq!(stmt.name, "index1");
        assert_eq!(stmt.table.name.as_str(), "t1");
        assert_eq!(stmt.columns, vec!["a".to_string(), "b".to_string()]);
        assert!(!stmt.fulltext);
    }

    #[test]
    fn test_parse_create_fulltext_index() {
        let stmt = CreateIndexStatement::parse("create fulltext index fts1 on t1(a)").unwrap();
        assert_eq!(stmt.name, "fts1");
        assert!(stmt.fulltext);
    }

    #[test]
    fn test_parse_create_index_qualified_table() {
        let stmt = CreateIndexStatement::parse("create index index1 on xx.t1(a, b)").unwrap();
        assert!(stmt.table.is_qualified());
        assert_eq!(stmt.table.to_string(), "xx.t1");
    }

    #[test]
    fn test_parse_create_index_invalid() {
        assert!(CreateIndexStatement::parse("create index index1 on t1").is_err());
        assert!(CreateIndexStatement::parse("create index on t1(a)").is_err());
        assert!(CreateIndexStatement::parse("create index i on t1()").is_err());
    }
}
