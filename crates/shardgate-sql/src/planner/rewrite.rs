//! Statement rewriting: logical table reference → backend-qualified
//! physical reference.
//!
//! DDL statements carry trailing clauses (engine, charset, partition
//! expressions) that must reach the backend verbatim, so the rewrite is a
//! textual substitution on the raw statement rather than an unparse. The
//! backticks that may quote the table reference are stripped first (two for
//! `` `table` ``, four for `` `db`.`table` ``), which normalises the text
//! enough for a single word-boundary substitution.

use crate::ddl::TableRef;
use regex::{NoExpand, Regex};
use shardgate_commons::errors::{Result, SqlError};
use shardgate_commons::models::{DatabaseName, TableName};

/// Rewrites `raw` so its logical table reference names the physical table
/// `physical` on database `database`. Only the first whole-word occurrence
/// is substituted; matching is exact and case-sensitive.
pub fn rewrite(
    raw: &str,
    table: &TableRef,
    database: &DatabaseName,
    physical: &TableName,
) -> Result<String> {
    let target = format!("`{}`.`{}`", database, physical);
    let (stripped, logical) = match &table.qualifier {
        Some(qualifier) => (
            raw.replacen('`', "", 4),
            format!("{}.{}", qualifier, table.name),
        ),
        None => (raw.replacen('`', "", 2), table.name.as_str().to_string()),
    };

    let pattern = format!(r"\b{}\b", regex::escape(&logical));
    let re = Regex::new(&pattern)
        .map_err(|e| SqlError::internal(format!("rewrite.pattern.error: {}", e)))?;
    Ok(re.replace(&stripped, NoExpand(&target)).into_owned())
}
