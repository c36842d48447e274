//! Common DDL parsing utilities
//!
//! Reusable helpers shared by the DDL statement parsers: whitespace
//! normalisation, CREATE/DROP prefix matching with optional IF [NOT] EXISTS,
//! and qualified identifier handling.

use crate::ddl::DdlResult;

/// Normalize SQL for pattern matching: collapse whitespace, strip a trailing
/// semicolon, and uppercase.
pub fn normalize_and_upper(sql: &str) -> String {
    let trimmed = sql.trim().trim_end_matches(';');
    let mut result = String::with_capacity(trimmed.len());
    let mut prev_was_space = false;

    for c in trimmed.chars() {
        if c.is_whitespace() {
            if !prev_was_space && !result.is_empty() {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_space = false;
        }
    }

    if result.ends_with(' ') {
        result.pop();
    }

    result
}

/// Strips a single level of MySQL backtick quoting from an identifier.
pub fn unquote(ident: &str) -> &str {
    ident.trim_matches('`')
}

/// Parse a CREATE/DROP-style statement with an optional IF [NOT] EXISTS
/// clause.
///
/// # Returns
///
/// Tuple of (entity_name, has_if_clause). The entity name keeps its
/// original case.
pub fn parse_create_drop_statement(
    sql: &str,
    command: &str,
    if_clause: &str,
) -> DdlResult<(String, bool)> {
    let trimmed = sql.trim().trim_end_matches(';');
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    let command_parts: Vec<&str> = command.split_whitespace().collect();
    let if_clause_tokens: Vec<&str> = if_clause.split_whitespace().collect();

    if tokens.len() < command_parts.len() {
        return Err(format!("Expected {} statement", command));
    }
    for (i, expected) in command_parts.iter().enumerate() {
        if !tokens[i].eq_ignore_ascii_case(expected) {
            return Err(format!("Expected {} statement", command));
        }
    }

    let has_if_clause = if tokens.len() > command_parts.len() + if_clause_tokens.len() {
        tokens[command_parts.len()..command_parts.len() + if_clause_tokens.len()]
            .iter()
            .zip(if_clause_tokens.iter())
            .all(|(actual, expected)| actual.eq_ignore_ascii_case(expected))
    } else {
        false
    };

    let skip = command_parts.len() + if has_if_clause { if_clause_tokens.len() } else { 0 };
    let name = tokens
        .get(skip)
        .ok_or_else(|| format!("Entity name is required after {}", command))?
        .to_string();

    Ok((name, has_if_clause))
}

/// Splits a parenthesised definition body on top-level commas, leaving
/// nested parentheses (type arguments, index column lists) intact.
pub fn split_top_level(body: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(body[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(body[start..].trim());
    items
}

/// Splits a potentially qualified table reference (`db.table` or `table`),
/// stripping backtick quoting from each part.
pub fn split_qualified(table_ref: &str) -> DdlResult<(Option<String>, String)> {
    let trimmed = table_ref.trim();
    if trimmed.is_empty() {
        return Err("Table reference cannot be empty".to_string());
    }
    if trimmed.contains(char::is_whitespace) {
        return Err(format!(
            "Invalid table reference '{}'. Table references should not contain spaces",
            table_ref
        ));
    }

    let parts: Vec<&str> = trimmed.split('.').collect();
    match parts.len() {
        1 => {
            let table = unquote(parts[0]);
            if table.is_empty() {
                return Err("Table name cannot be empty".to_string());
            }
            Ok((None, table.to_string()))
        }
        2 => {
            let database = unquote(parts[0]);
            let table = unquote(parts[1]);
            if database.is_empty() {
                return Err("Database name cannot be empty".to_string());
            }
            if table.is_empty() {
                return Err("Table name cannot be empty".to_string());
            }
            Ok((Some(database.to_string()), table.to_string()))
        }
        _ => Err(format!(
            "Invalid table reference '{}'. Expected 'table' or 'database.table'",
            table_ref
        )),
    }
}
