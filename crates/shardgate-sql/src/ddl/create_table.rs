//! CREATE TABLE statement parser
//!
//! Parses SQL statements like:
//! - CREATE TABLE t1(id int, b int) PARTITION BY HASH(id)
//! - CREATE TABLE t2(a int, b int) GLOBAL
//! - CREATE TABLE IF NOT EXISTS db1.t3(a int primary key, b int)
//!
//! The trailing distribution clause (GLOBAL / SINGLE / PARTITION BY HASH) is
//! ShardGate grammar, not MySQL grammar; a regex pre-pass extracts and strips
//! it before the remainder goes through sqlparser. Engine and charset table
//! options stay in the statement text and are left to the backends.

use crate::ddl::types::{
    ColKeyOpt, ColumnDef, DistributionHint, IndexDef, TableRef, TableSpec,
};
use crate::ddl::{parsing, DdlResult};
use once_cell::sync::Lazy;
use regex::Regex;
use shardgate_commons::models::{DatabaseName, TableName};
use sqlparser::ast::{
    ColumnOption, CreateTable, Expr, IndexColumn, ObjectName, Statement, TableConstraint,
};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;

static DISTRIBUTION_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\s+(?:(GLOBAL)|(SINGLE)|PARTITION\s+BY\s+HASH\s*\(\s*`?([A-Za-z0-9_]+)`?\s*\))\s*$",
    )
    .expect("distribution suffix pattern")
});

static UNIQUE_KEY_OPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bUNIQUE\s+KEY\b").expect("unique key option pattern"));

/// CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableStatement {
    /// Table reference as written by the client
    pub table: TableRef,

    /// Trailing distribution clause
    pub hint: DistributionHint,

    /// Column and index definitions
    pub spec: TableSpec,

    /// If true, don't error if the table already exists
    pub if_not_exists: bool,
}

impl CreateTableStatement {
    /// Parse a CREATE TABLE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let trimmed = sql.trim().trim_end_matches(';').trim_end();
        let (core_sql, hint) = strip_distribution_suffix(trimmed);

        let dialect = MySqlDialect {};
        let mut statements =
            Parser::parse_sql(&dialect, &core_sql).map_err(|e| e.to_string())?;
        if statements.len() != 1 {
            return Err("Expected exactly one CREATE TABLE statement".to_string());
        }

        match statements.remove(0) {
            Statement::CreateTable(CreateTable {
                name,
                columns,
                constraints,
                if_not_exists,
                ..
            }) => {
                let table = table_ref_from_object_name(&name)?;
                let mut spec = convert_table_spec(&columns, &constraints)?;
                promote_unique_key_columns(&mut spec, &core_sql);
                Ok(Self {
                    table,
                    hint,
                    spec,
                    if_not_exists,
                })
            }
            _ => Err("Expected CREATE TABLE statement".to_string()),
        }
    }
}

/// Extracts and strips the trailing distribution clause.
fn strip_distribution_suffix(sql: &str) -> (String, DistributionHint) {
    let Some(caps) = DISTRIBUTION_SUFFIX_RE.captures(sql) else {
        return (sql.to_string(), DistributionHint::Unspecified);
    };
    let start = caps.get(0).map_or(sql.len(), |m| m.start());
    let hint = if caps.get(1).is_some() {
        DistributionHint::Global
    } else if caps.get(2).is_some() {
        DistributionHint::Single
    } else {
        DistributionHint::Partitioned(caps[3].to_string())
    };
    (sql[..start].to_string(), hint)
}

/// Parses a parenthesised column/index definition block by wrapping it in a
/// synthetic CREATE TABLE. ALTER ... ADD/MODIFY COLUMN reuses the CREATE
/// grammar this way.
pub(crate) fn parse_table_body(block: &str) -> DdlResult<TableSpec> {
    let body = block.trim();
    if body.is_empty() {
        return Err("Column definitions cannot be empty".to_string());
    }
    let wrapped = if body.starts_with('(') {
        format!("CREATE TABLE __shardgate {}", body)
    } else {
        format!("CREATE TABLE __shardgate ({})", body)
    };

    let dialect = MySqlDialect {};
    let mut statements = Parser::parse_sql(&dialect, &wrapped).map_err(|e| e.to_string())?;
    if statements.len() != 1 {
        return Err("Expected a single column definition block".to_string());
    }
    match statements.remove(0) {
        Statement::CreateTable(CreateTable {
            columns,
            constraints,
            ..
        }) => {
            let mut spec = convert_table_spec(&columns, &constraints)?;
            promote_unique_key_columns(&mut spec, &wrapped);
            Ok(spec)
        }
        _ => Err("Expected a column definition block".to_string()),
    }
}

/// sqlparser folds the two-word `UNIQUE KEY` column option into plain
/// `UNIQUE`; the distinction is recovered from the statement text.
fn promote_unique_key_columns(spec: &mut TableSpec, sql: &str) {
    let declared = unique_key_columns(sql);
    if declared.is_empty() {
        return;
    }
    for column in &mut spec.columns {
        if column.key_opt == ColKeyOpt::Unique && declared.iter().any(|name| name == &column.name)
        {
            column.key_opt = ColKeyOpt::UniqueKey;
        }
    }
}

/// Column names whose definition carries the `UNIQUE KEY` option. Table-level
/// `UNIQUE KEY name (cols)` constraints start with a constraint keyword, not
/// a column name, and are skipped.
fn unique_key_columns(sql: &str) -> Vec<String> {
    let Some(open) = sql.find('(') else {
        return Vec::new();
    };
    let Some(close) = sql.rfind(')') else {
        return Vec::new();
    };
    if close <= open {
        return Vec::new();
    }

    parsing::split_top_level(&sql[open + 1..close])
        .into_iter()
        .filter(|item| UNIQUE_KEY_OPT_RE.is_match(item))
        .filter_map(|item| item.split_whitespace().next())
        .map(|first| parsing::unquote(first).to_string())
        .filter(|first| !is_constraint_keyword(first))
        .collect()
}

fn is_constraint_keyword(word: &str) -> bool {
    ["UNIQUE", "KEY", "INDEX", "PRIMARY", "CONSTRAINT", "FULLTEXT"]
        .iter()
        .any(|keyword| word.eq_ignore_ascii_case(keyword))
}

fn table_ref_from_object_name(name: &ObjectName) -> DdlResult<TableRef> {
    let parts = &name.0;
    match parts.len() {
        1 => {
            let table = parts[0]
                .as_ident()
                .ok_or_else(|| "Function-based table references are not supported".to_string())?;
            Ok(TableRef {
                qualifier: None,
                name: TableName::new(table.value.as_str()),
            })
        }
        2 => {
            let database = parts[0]
                .as_ident()
                .ok_or_else(|| "Function-based database references are not supported".to_string())?;
            let table = parts[1]
                .as_ident()
                .ok_or_else(|| "Function-based table references are not supported".to_string())?;
            Ok(TableRef {
                qualifier: Some(DatabaseName::new(database.value.as_str())),
                name: TableName::new(table.value.as_str()),
            })
        }
        _ => Err("Invalid table name format. Expected 'table' or 'database.table'".to_string()),
    }
}

fn convert_table_spec(
    columns: &[sqlparser::ast::ColumnDef],
    constraints: &[TableConstraint],
) -> DdlResult<TableSpec> {
    let mut spec = TableSpec::default();

    for column in columns {
        let mut key_opt = ColKeyOpt::None;
        for option in &column.options {
            match &option.option {
                ColumnOption::Unique { is_primary: true, .. } => {
                    key_opt = ColKeyOpt::Primary;
                }
                ColumnOption::Unique {
                    is_primary: false, ..
                } => {
                    if key_opt == ColKeyOpt::None {
                        key_opt = ColKeyOpt::Unique;
                    }
                }
                ColumnOption::DialectSpecific(tokens) => {
                    // MySQL's bare `KEY` column shorthand comes through as a
                    // dialect-specific token.
                    let joined = tokens
                        .iter()
                        .map(|t| t.to_string())
                        .collect::<Vec<_>>()
                        .join(" ");
                    if joined.eq_ignore_ascii_case("KEY") && key_opt == ColKeyOpt::None {
                        key_opt = ColKeyOpt::Key;
                    }
                }
                _ => {}
            }
        }
        spec.columns.push(ColumnDef {
            name: column.name.value.clone(),
            sql_type: column.data_type.to_string(),
            key_opt,
        });
    }

    for constraint in constraints {
        match constraint {
            TableConstraint::PrimaryKey {
                name,
                index_name,
                columns,
                ..
            } => {
                spec.indexes.push(IndexDef {
                    name: name
                        .as_ref()
                        .or(index_name.as_ref())
                        .map(|n| n.value.clone())
                        .unwrap_or_else(|| "PRIMARY".to_string()),
                    columns: index_column_names(columns)?,
                    unique: true,
                    primary: true,
                });
            }
            TableConstraint::Unique {
                name,
                index_name,
                columns,
                ..
            } => {
                spec.indexes.push(IndexDef {
                    name: name
                        .as_ref()
                        .or(index_name.as_ref())
                        .map(|n| n.value.clone())
                        .unwrap_or_default(),
                    columns: index_column_names(columns)?,
                    unique: true,
                    primary: false,
                });
            }
            TableConstraint::Index { name, columns, .. } => {
                spec.indexes.push(IndexDef {
                    name: name.as_ref().map(|n| n.value.clone()).unwrap_or_default(),
                    columns: index_column_names(columns)?,
                    unique: false,
                    primary: false,
                });
            }
            _ => {}
        }
    }

    if spec.columns.is_empty() {
        return Err("Table must have at least one column".to_string());
    }

    Ok(spec)
}

fn index_column_names(columns: &[IndexColumn]) -> DdlResult<Vec<String>> {
    columns
        .iter()
        .map(|column| match &column.column.expr {
            Expr::Identifier(ident) => Ok(ident.value.clone()),
            other => Err(format!("Unsupported index column expression: {}", other)),
        })
        .collect()
}
