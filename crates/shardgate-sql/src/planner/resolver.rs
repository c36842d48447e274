//! Target database resolution.

use crate::ddl::TableRef;
use shardgate_commons::errors::{Result, SqlError};
use shardgate_commons::models::DatabaseName;

/// Resolves the database a statement addresses: an explicit `db.table`
/// qualifier wins, then the session's default database. With neither, the
/// statement is unresolvable and fails the way MySQL reports a missing
/// default schema.
pub fn resolve_database(table: &TableRef, session_db: &str) -> Result<DatabaseName> {
    if let Some(qualifier) = &table.qualifier {
        return Ok(qualifier.clone());
    }
    if !session_db.is_empty() {
        return Ok(DatabaseName::new(session_db));
    }
    Err(SqlError::UnknownDatabase(String::new()))
}
