//! ALTER TABLE statement parser
//!
//! Parses SQL statements like:
//! - ALTER TABLE t1 ADD COLUMN(c1 int, c2 varchar(100))
//! - ALTER TABLE t1 DROP COLUMN c2
//! - ALTER TABLE t1 MODIFY COLUMN c2 varchar(1)
//! - ALTER TABLE t1 ENGINE=tokudb
//! - ALTER TABLE t1 CONVERT TO CHARACTER SET utf8mb4
//!
//! Column blocks go through the CREATE TABLE grammar (sqlparser) via a
//! synthetic statement; the engine/charset forms are MySQL-isms handled with
//! keyword matching.

use crate::ddl::create_table::parse_table_body;
use crate::ddl::types::{ColumnDef, TableRef, TableSpec};
use crate::ddl::{parsing, DdlResult};

/// Operation carried by an ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlterOperation {
    /// Add one or more columns (and any index definitions in the block).
    AddColumns(TableSpec),

    /// Drop an existing column.
    DropColumn(String),

    /// Change an existing column's definition.
    ModifyColumn(ColumnDef),

    /// Switch the storage engine.
    Engine(String),

    /// Convert the table to another character set.
    Charset(String),
}

/// ALTER TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTableStatement {
    /// Table reference as written by the client
    pub table: TableRef,

    /// Operation to perform
    pub operation: AlterOperation,
}

impl AlterTableStatement {
    /// Parse an ALTER TABLE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let trimmed = sql.trim().trim_end_matches(';');
        let tokens: Vec<&str> = trimmed.split_whitespace().collect();

        if tokens.len() < 4
            || !tokens[0].eq_ignore_ascii_case("ALTER")
            || !tokens[1].eq_ignore_ascii_case("TABLE")
        {
            return Err("Expected ALTER TABLE statement".to_string());
        }

        let table = TableRef::parse(tokens[2])?;
        let rest = tokens[3..].join(" ");
        let rest_upper = rest.to_uppercase();

        let operation = if rest_upper.starts_with("ENGINE") {
            let value = rest["ENGINE".len()..].trim().trim_start_matches('=').trim();
            let engine = value
                .split_whitespace()
                .next()
                .ok_or_else(|| "Engine name required after ENGINE".to_string())?;
            AlterOperation::Engine(engine.to_string())
        } else if rest_upper.starts_with("CONVERT TO CHARACTER SET") {
            let value = rest["CONVERT TO CHARACTER SET".len()..].trim();
            let charset = value
                .split_whitespace()
                .next()
                .ok_or_else(|| "Charset name required after CONVERT TO CHARACTER SET".to_string())?;
            AlterOperation::Charset(charset.to_string())
        } else if rest_upper.starts_with("ADD COLUMN") {
            let block = rest["ADD COLUMN".len()..].trim();
            AlterOperation::AddColumns(parse_table_body(block)?)
        } else if rest_upper.starts_with("DROP COLUMN") {
            let column = rest["DROP COLUMN".len()..].trim();
            if column.is_empty() || column.contains(char::is_whitespace) {
                return Err("DROP COLUMN expects exactly one column name".to_string());
            }
            AlterOperation::DropColumn(parsing::unquote(column).to_string())
        } else if rest_upper.starts_with("MODIFY COLUMN") {
            let block = rest["MODIFY COLUMN".len()..].trim();
            let spec = parse_table_body(block)?;
            if spec.columns.len() != 1 || !spec.indexes.is_empty() {
                return Err("MODIFY COLUMN expects exactly one column definition".to_string());
            }
            let Some(column) = spec.columns.into_iter().next() else {
                return Err("MODIFY COLUMN expects exactly one column definition".to_string());
            };
            AlterOperation::ModifyColumn(column)
        } else {
            return Err(format!("Unsupported ALTER TABLE operation: {}", rest));
        };

        Ok(Self { table, operation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::types::ColKeyOpt;

    #[test]
    fn test_parse_add_single_column() {
        let stmt = AlterTableStatement::parse("alter table t1 add column c1 int").unwrap();
        assert_eq!(stmt.table.name.as_str(), "t1");
        match stmt.operation {
            AlterOperation::AddColumns(spec) => {
                assert_eq!(spec.columns.len(), 1);
                assert_eq!(spec.columns[0].name, "c1");
            }
            _ => panic!("Expected AddColumns operation"),
        }
    }

    #[test]
    fn test_parse_add_column_block() {
        let stmt =
            AlterTableStatement::parse("alter table t1 add column(c1 int, c2 varchar(100))")
                .unwrap();
        match stmt.operation {
            AlterOperation::AddColumns(spec) => {
                assert_eq!(spec.columns.len(), 2);
                assert_eq!(spec.columns[1].name, "c2");
            }
            _ => panic!("Expected AddColumns operation"),
        }
    }

    #[test]
    fn test_parse_add_column_with_key_option() {
        let stmt =
            AlterTableStatement::parse("alter table t1 add column(c1 int unique)").unwrap();
        match stmt.operation {
            AlterOperation::AddColumns(spec) => {
                assert_eq!(spec.columns[0].key_opt, ColKeyOpt::Unique);
            }
            _ => panic!("Expected AddColumns operation"),
        }
    }

    #[test]
    fn test_parse_add_column_with_unique_key_option() {
        let stmt =
            AlterTableStatement::parse("alter table t1 add column(c1 int unique key)").unwrap();
        match stmt.operation {
            AlterOperation::AddColumns(spec) => {
                assert_eq!(spec.columns[0].key_opt, ColKeyOpt::UniqueKey);
            }
            _ => panic!("Expected AddColumns operation"),
        }
    }

    #[test]
    fn test_parse_drop_column() {
        let stmt = AlterTableStatement::parse("alter table t1 drop column c2").unwrap();
        assert_eq!(stmt.operation, AlterOperation::DropColumn("c2".to_string()));
    }

    #[test]
    fn test_parse_modify_column() {
        let stmt =
            AlterTableStatement::parse("alter table t1 modify column c2 varchar(1)").unwrap();
        match stmt.operation {
            AlterOperation::ModifyColumn(column) => {
                assert_eq!(column.name, "c2");
                assert_eq!(column.key_opt, ColKeyOpt::None);
            }
            _ => panic!("Expected ModifyColumn operation"),
        }
    }

    #[test]
    fn test_parse_engine() {
        let stmt = AlterTableStatement::parse("alter table t1 engine=tokudb").unwrap();
        assert_eq!(stmt.operation, AlterOperation::Engine("tokudb".to_string()));

        let stmt = AlterTableStatement::parse("alter table t1 engine = innodb").unwrap();
        assert_eq!(stmt.operation, AlterOperation::Engine("innodb".to_string()));
    }

    #[test]
    fn test_parse_convert_charset() {
        let stmt =
            AlterTableStatement::parse("alter table t1 convert to character set utf8mb").unwrap();
        assert_eq!(stmt.operation, AlterOperation::Charset("utf8mb".to_string()));
    }

    #[test]
    fn test_parse_qualified_table() {
        let stmt = AlterTableStatement::parse("alter table db1.t1 drop column c2").unwrap();
        assert!(stmt.table.is_qualified());
        assert_eq!(stmt.table.to_string(), "db1.t1");
    }

    #[test]
    fn test_parse_unsupported_operation() {
        assert!(AlterTableStatement::parse("alter table t1 rename to t2").is_err());
        assert!(AlterTableStatement::parse("alter table t1").is_err());
        assert!(AlterTableStatement::parse("select 1").is_err());
    }
}
