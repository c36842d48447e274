//! DROP TABLE statement parser
//!
//! Parses SQL statements like:
//! - DROP TABLE t1
//! - DROP TABLE IF EXISTS `t1`
//! - DROP TABLE db2.t3, t2, db1.t1
//!
//! A statement may name several tables; the planner fans them out into
//! independent single-target drops.

use crate::ddl::types::TableRef;
use crate::ddl::DdlResult;
use once_cell::sync::Lazy;
use regex::Regex;

static DROP_TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*DROP\s+TABLE\s+(IF\s+EXISTS\s+)?").expect("drop table pattern")
});

/// DROP TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTableStatement {
    /// Tables to drop, in client order
    pub tables: Vec<TableRef>,

    /// If true, don't error if a table doesn't exist
    pub if_exists: bool,
}

impl DropTableStatement {
    /// Parse a DROP TABLE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let trimmed = sql.trim().trim_end_matches(';');
        let Some(caps) = DROP_TABLE_RE.captures(trimmed) else {
            return Err("Expected DROP TABLE statement".to_string());
        };
        let if_exists = caps.get(1).is_some();
        let rest = &trimmed[caps.get(0).map_or(0, |m| m.end())..];

        let tables = rest
            .split(',')
            .map(|target| TableRef::parse(target.trim()))
            .collect::<DdlResult<Vec<_>>>()?;
        if tables.is_empty() {
            return Err("Table name is required after DROP TABLE".to_string());
        }

        Ok(Self { tables, if_exists })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drop_table() {
        let stmt = DropTableStatement::parse("drop table t1").unwrap();
        assert_eq!(stmt.tables.len(), 1);
        assert_eq!(stmt.tables[0].name.as_str(), "t1");
        assert!(!stmt.if_exists);
    }

    #[test]
    fn test_parse_drop_table_if_exists_quoted() {
        let stmt = DropTableStatement::parse("DROP TABLE IF EXISTS `t1`").unwrap();
        assert_eq!(stmt.tables[0].name.as_str(), "t1");
        assert!(stmt.if_exists);
    }

    #[test]
    fn test_parse_drop_multiple_tables() {
        let stmt = DropTableStatement::parse("drop table db2.t3, t2, db1.t1").unwrap();
        assert_eq!(stmt.tables.len(), 3);
        assert_eq!(stmt.tables[0].to_string(), "db2.t3");
        assert_eq!(stmt.tables[1].to_string(), "t2");
        assert_eq!(stmt.tables[2].to_string(), "db1.t1");
    }

    #[test]
    fn test_parse_drop_table_missing_name() {
        assert!(DropTableStatement::parse("drop table").is_err());
        assert!(DropTableStatement::parse("drop table t1,,t2").is_err());
    }

    #[test]
    fn test_parse_invalid_statement() {
        assert!(DropTableStatement::parse("select * from t1").is_err());
    }
}
