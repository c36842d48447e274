//! Shard lookup for DDL planning.
//!
//! DDL always addresses a table in full, so the router is queried with null
//! bounds: every physical segment, in registration order.

use shardgate_commons::errors::Result;
use shardgate_commons::models::DatabaseName;
use shardgate_router::{Segment, ShardRouter};

/// Sharding key of `table`, or `None` for global and single tables.
pub fn shard_key(
    router: &ShardRouter,
    database: &DatabaseName,
    table: &str,
) -> Result<Option<String>> {
    router.shard_key(database.as_str(), table)
}

/// Every physical segment of `table`.
pub fn all_segments(
    router: &ShardRouter,
    database: &DatabaseName,
    table: &str,
) -> Result<Vec<Segment>> {
    router.lookup(database.as_str(), table, None, None)
}
