//! DDL plan assembly.

use crate::classifier::{DdlStatement, DdlStatementKind};
use crate::ddl::TableRef;
use crate::planner::{constraints, distribution, lookup, resolver, rewrite, PlanKind};
use crate::planner::distribution::TableDistribution;
use serde::Serialize;
use shardgate_commons::errors::{Result, SqlError};
use shardgate_commons::execution::{QueryTuple, RequestMode};
use shardgate_router::ShardRouter;

/// A built DDL plan: request mode plus the ordered per-backend statements.
///
/// CREATE/DROP DATABASE short-circuit to a scatter plan with no tuples; the
/// executor honours `RequestMode::Scatter` by re-sending the raw query to
/// every backend. Everything else is targeted: one tuple per physical
/// segment, in lookup order. Plans are immutable once built and dropped
/// when the client request completes.
#[derive(Debug, Clone)]
pub struct DdlPlan {
    kind: PlanKind,
    raw_query: String,
    req_mode: RequestMode,
    queries: Vec<QueryTuple>,
}

#[derive(Serialize)]
struct Explain<'a> {
    #[serde(rename = "RawQuery", skip_serializing_if = "raw_is_empty")]
    raw_query: &'a str,

    #[serde(rename = "Partitions", skip_serializing_if = "partitions_are_empty")]
    partitions: &'a [QueryTuple],
}

fn raw_is_empty(raw: &&str) -> bool {
    raw.is_empty()
}

fn partitions_are_empty(partitions: &&[QueryTuple]) -> bool {
    partitions.is_empty()
}

impl DdlPlan {
    /// Builds the plan for a classified DDL statement.
    ///
    /// `session_db` is the connection's default database, possibly empty.
    /// Fails fast: the first resolution, validation or lookup error aborts
    /// the build.
    pub fn build(
        session_db: &str,
        statement: &DdlStatement,
        router: &ShardRouter,
    ) -> Result<DdlPlan> {
        let kind = statement.kind();
        let (req_mode, queries) = match kind {
            DdlStatementKind::CreateDatabase(_) | DdlStatementKind::DropDatabase(_) => {
                (RequestMode::Scatter, Vec::new())
            }
            DdlStatementKind::DropTable(drop) if drop.tables.len() > 1 => {
                // Multi-target DROP fans out into independent single-target
                // drops; their tuples concatenate in client order.
                let mut queries = Vec::new();
                for table in &drop.tables {
                    let raw = single_drop_query(table, drop.if_exists);
                    queries.extend(plan_table(session_db, &raw, table, kind, router)?);
                }
                (RequestMode::Targeted, queries)
            }
            _ => {
                let table = target_table(kind)?;
                let queries = plan_table(session_db, statement.sql_text(), table, kind, router)?;
                (RequestMode::Targeted, queries)
            }
        };

        let plan = DdlPlan {
            kind: PlanKind::Ddl,
            raw_query: statement.sql_text().to_string(),
            req_mode,
            queries,
        };
        log::debug!(
            "ddl plan built: mode={}, queries={}, size={}",
            plan.req_mode,
            plan.queries.len(),
            plan.size()
        );
        Ok(plan)
    }

    /// Kind of the plan.
    pub fn kind(&self) -> PlanKind {
        self.kind
    }

    /// The raw client SQL the plan was built from.
    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    /// How the executor must dispatch this plan.
    pub fn request_mode(&self) -> RequestMode {
        self.req_mode
    }

    /// Per-backend statements, in segment lookup order.
    pub fn queries(&self) -> &[QueryTuple] {
        &self.queries
    }

    /// JSON explain form: `RawQuery` plus `Partitions`, empty fields
    /// omitted.
    pub fn explain(&self) -> String {
        let explain = Explain {
            raw_query: &self.raw_query,
            partitions: &self.queries,
        };
        match serde_json::to_string_pretty(&explain) {
            Ok(json) => json,
            Err(e) => e.to_string(),
        }
    }

    /// Memory footprint of the plan's SQL text, used to bound plan caches.
    pub fn size(&self) -> usize {
        self.raw_query.len()
            + self
                .queries
                .iter()
                .map(|tuple| tuple.sql.len())
                .sum::<usize>()
    }
}

/// Plans one table-addressing statement: resolve, validate, look up,
/// rewrite.
fn plan_table(
    session_db: &str,
    raw: &str,
    table: &TableRef,
    kind: &DdlStatementKind,
    router: &ShardRouter,
) -> Result<Vec<QueryTuple>> {
    let database = resolver::resolve_database(table, session_db)?;

    match kind {
        DdlStatementKind::CreateTable(create) => {
            let dist = distribution::classify_create(create)?;
            if let TableDistribution::Partitioned { shard_key } = &dist {
                constraints::check_create_spec(&create.spec, shard_key)?;
            }
        }
        DdlStatementKind::AlterTable(alter) => {
            if let Some(shard_key) = lookup::shard_key(router, &database, table.name.as_str())? {
                constraints::check_alter(&alter.operation, &shard_key)?;
            }
        }
        _ => {}
    }

    let segments = lookup::all_segments(router, &database, table.name.as_str())?;
    let mut tuples = Vec::with_capacity(segments.len());
    for segment in &segments {
        let sql = rewrite::rewrite(raw, table, &database, &segment.table)?;
        tuples.push(QueryTuple {
            sql,
            backend: segment.backend.clone(),
            range: segment.range_token(),
        });
    }
    Ok(tuples)
}

fn target_table(kind: &DdlStatementKind) -> Result<&TableRef> {
    match kind {
        DdlStatementKind::CreateTable(statement) => Ok(&statement.table),
        DdlStatementKind::AlterTable(statement) => Ok(&statement.table),
        DdlStatementKind::TruncateTable(statement) => Ok(&statement.table),
        DdlStatementKind::CreateIndex(statement) => Ok(&statement.table),
        DdlStatementKind::DropIndex(statement) => Ok(&statement.table),
        DdlStatementKind::DropTable(statement) => statement
            .tables
            .first()
            .ok_or_else(|| SqlError::internal("ddl.drop.table.without.target")),
        DdlStatementKind::CreateDatabase(_) | DdlStatementKind::DropDatabase(_) => {
            Err(SqlError::internal("ddl.database.statement.has.no.table"))
        }
    }
}

/// Synthesises the raw query for one target of a multi-table DROP. Quoting
/// is normalised to backticks so the rewriter's strip-then-substitute pass
/// behaves identically for every target.
fn single_drop_query(table: &TableRef, if_exists: bool) -> String {
    let guard = if if_exists { "if exists " } else { "" };
    match &table.qualifier {
        Some(database) => format!("drop table {}`{}`.`{}`", guard, database, table.name),
        None => format!("drop table {}`{}`", guard, table.name),
    }
}
