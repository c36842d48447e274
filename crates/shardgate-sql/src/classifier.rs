//! DDL statement classification.
//!
//! Dispatches raw SQL to the right DDL parser and yields a typed statement.
//! Classification and parsing happen in one step; every statement keeps the
//! original SQL text because the planner rewrites that text per segment.

use crate::ddl::{
    parsing, AlterTableStatement, CreateDatabaseStatement, CreateIndexStatement,
    CreateTableStatement, DdlResult, DropDatabaseStatement, DropIndexStatement,
    DropTableStatement, TruncateTableStatement,
};
use shardgate_commons::errors::{Result, SqlError};

/// A classified DDL statement together with the raw SQL it came from.
#[derive(Debug, Clone)]
pub struct DdlStatement {
    /// Original SQL text
    sql_text: String,

    /// Parsed statement variant
    kind: DdlStatementKind,
}

impl DdlStatement {
    /// The raw SQL exactly as the client sent it.
    pub fn sql_text(&self) -> &str {
        &self.sql_text
    }

    /// The parsed statement variant.
    pub fn kind(&self) -> &DdlStatementKind {
        &self.kind
    }
}

/// Statement type variants.
#[derive(Debug, Clone)]
pub enum DdlStatementKind {
    /// CREATE DATABASE <name>
    CreateDatabase(CreateDatabaseStatement),
    /// DROP DATABASE <name>
    DropDatabase(DropDatabaseStatement),
    /// CREATE TABLE <name>(...) [GLOBAL | SINGLE | PARTITION BY HASH(col)]
    CreateTable(CreateTableStatement),
    /// ALTER TABLE <name> ...
    AlterTable(AlterTableStatement),
    /// DROP TABLE <name>[, <name>...]
    DropTable(DropTableStatement),
    /// TRUNCATE TABLE <name>
    TruncateTable(TruncateTableStatement),
    /// CREATE [FULLTEXT] INDEX <name> ON <table>(...)
    CreateIndex(CreateIndexStatement),
    /// DROP INDEX <name> ON <table>
    DropIndex(DropIndexStatement),
}

/// Classifies and parses a DDL statement.
///
/// Anything outside the DDL grammar, including the unsupported RENAME
/// TABLE, is rejected with the client-visible syntax error.
pub fn classify(sql: &str) -> Result<DdlStatement> {
    let upper = parsing::normalize_and_upper(sql);

    let parsed: DdlResult<DdlStatementKind> = if upper.starts_with("CREATE DATABASE") {
        CreateDatabaseStatement::parse(sql).map(DdlStatementKind::CreateDatabase)
    } else if upper.starts_with("DROP DATABASE") {
        DropDatabaseStatement::parse(sql).map(DdlStatementKind::DropDatabase)
    } else if upper.starts_with("CREATE TABLE") {
        CreateTableStatement::parse(sql).map(DdlStatementKind::CreateTable)
    } else if upper.starts_with("ALTER TABLE") {
        AlterTableStatement::parse(sql).map(DdlStatementKind::AlterTable)
    } else if upper.starts_with("DROP TABLE") {
        DropTableStatement::parse(sql).map(DdlStatementKind::DropTable)
    } else if upper.starts_with("TRUNCATE") {
        TruncateTableStatement::parse(sql).map(DdlStatementKind::TruncateTable)
    } else if upper.starts_with("CREATE INDEX") || upper.starts_with("CREATE FULLTEXT INDEX") {
        CreateIndexStatement::parse(sql).map(DdlStatementKind::CreateIndex)
    } else if upper.starts_with("DROP INDEX") {
        DropIndexStatement::parse(sql).map(DdlStatementKind::DropIndex)
    } else {
        let near = sql
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_lowercase();
        Err(format!("syntax error near '{}'", near))
    };

    match parsed {
        Ok(kind) => Ok(DdlStatement {
            sql_text: sql.to_string(),
            kind,
        }),
        Err(detail) => Err(SqlError::SyntaxError(detail)),
    }
}
