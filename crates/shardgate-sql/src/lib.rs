//! SQL layer of the ShardGate sharding proxy.
//!
//! This crate turns raw DDL text into per-backend execution plans:
//!
//! 1. [`classify`] dispatches a statement to the right DDL parser and yields
//!    a typed [`DdlStatement`];
//! 2. [`DdlPlan::build`] resolves the target database, validates the
//!    sharded-table invariants, asks the router for the physical segments
//!    and rewrites the statement once per segment.
//!
//! The wire protocol front-end, privilege checks and the scatter executor
//! live elsewhere; this crate only plans.
//!
//! # Example
//!
//! ```no_run
//! use shardgate_commons::models::BackendName;
//! use shardgate_router::ShardRouter;
//! use shardgate_sql::{classify, DdlPlan};
//!
//! # fn example() -> shardgate_commons::Result<()> {
//! let router = ShardRouter::new(vec![BackendName::new("backend0")]);
//! router.create_database("test")?;
//! router.register_hash_table_with("test", "t1", "id", 2)?;
//!
//! let statement = classify("create table t1(id int, b int) partition by hash(id)")?;
//! let plan = DdlPlan::build("test", &statement, &router)?;
//! assert_eq!(plan.queries().len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod ddl;
pub mod planner;

pub use classifier::{classify, DdlStatement, DdlStatementKind};
pub use planner::ddl_plan::DdlPlan;
pub use planner::PlanKind;
