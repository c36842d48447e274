//! Schema router for the ShardGate proxy.
//!
//! The router answers two questions for every logical table:
//! which column (if any) is its sharding key, and which physical segments
//! realise it. DDL execution and admin flows register databases and tables;
//! planning only ever reads. The catalog index lives in memory behind a
//! `RwLock`, so a router handle can be shared across connection contexts.
//!
//! Three distribution kinds are modelled:
//! - *hash*: the table is split into N physical tables `name_0000..` spread
//!   round-robin over the backends, each owning a slice of the slot space;
//! - *global*: the table is replicated in full on every backend;
//! - *single*: the table lives entirely on the first backend.

pub mod catalog;
pub mod config;

pub use catalog::{Segment, SlotRange};
pub use config::TopologyConfig;

use catalog::TableEntry;
use parking_lot::RwLock;
use shardgate_commons::constants::DEFAULT_PARTITIONS;
use shardgate_commons::errors::{Result, SqlError};
use shardgate_commons::models::BackendName;
use std::collections::HashMap;

/// In-memory schema router: databases, tables, distribution policies and
/// physical segment enumeration.
pub struct ShardRouter {
    backends: Vec<BackendName>,
    default_partitions: u32,
    schemas: RwLock<HashMap<String, HashMap<String, TableEntry>>>,
}

impl ShardRouter {
    /// Creates a router over an ordered backend list.
    pub fn new(backends: Vec<BackendName>) -> Self {
        Self {
            backends,
            default_partitions: DEFAULT_PARTITIONS,
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// Builds a router from a validated topology description.
    pub fn from_config(config: &TopologyConfig) -> Result<Self> {
        config.validate()?;
        let backends = config.backends.iter().map(BackendName::new).collect();
        Ok(Self {
            backends,
            default_partitions: config.default_partitions,
            schemas: RwLock::new(HashMap::new()),
        })
    }

    /// Backends the router distributes over, in configuration order.
    pub fn backends(&self) -> &[BackendName] {
        &self.backends
    }

    /// Partition count applied by [`ShardRouter::register_hash_table`].
    pub fn default_partitions(&self) -> u32 {
        self.default_partitions
    }

    /// Registers a logical database.
    pub fn create_database(&self, database: &str) -> Result<()> {
        let mut schemas = self.schemas.write();
        if schemas.contains_key(database) {
            return Err(SqlError::DatabaseExists(database.to_string()));
        }
        schemas.insert(database.to_string(), HashMap::new());
        Ok(())
    }

    /// True when the logical database is registered.
    pub fn database_exists(&self, database: &str) -> bool {
        self.schemas.read().contains_key(database)
    }

    /// Registers a hash-partitioned table with the configured default
    /// partition count.
    pub fn register_hash_table(&self, database: &str, table: &str, shard_key: &str) -> Result<()> {
        self.register_hash_table_with(database, table, shard_key, self.default_partitions)
    }

    /// Registers a hash-partitioned table split into `partitions` physical
    /// segments.
    pub fn register_hash_table_with(
        &self,
        database: &str,
        table: &str,
        shard_key: &str,
        partitions: u32,
    ) -> Result<()> {
        if self.backends.is_empty() {
            return Err(SqlError::internal("router.no.backends.configured"));
        }
        if partitions == 0 {
            return Err(SqlError::internal(format!(
                "router.invalid.partition.count: {}",
                partitions
            )));
        }
        let segments = catalog::hash_segments(table, &self.backends, partitions);
        log::debug!(
            "router: registered hash table {}.{} on key '{}' with {} segments",
            database,
            table,
            shard_key,
            segments.len()
        );
        self.register(
            database,
            table,
            TableEntry {
                shard_key: Some(shard_key.to_string()),
                segments,
            },
        )
    }

    /// Registers a table replicated on every backend.
    pub fn register_global_table(&self, database: &str, table: &str) -> Result<()> {
        if self.backends.is_empty() {
            return Err(SqlError::internal("router.no.backends.configured"));
        }
        let segments = catalog::global_segments(table, &self.backends);
        self.register(
            database,
            table,
            TableEntry {
                shard_key: None,
                segments,
            },
        )
    }

    /// Registers a table hosted in full on the first backend.
    pub fn register_single_table(&self, database: &str, table: &str) -> Result<()> {
        if self.backends.is_empty() {
            return Err(SqlError::internal("router.no.backends.configured"));
        }
        let segments = catalog::single_segment(table, &self.backends);
        self.register(
            database,
            table,
            TableEntry {
                shard_key: None,
                segments,
            },
        )
    }

    fn register(&self, database: &str, table: &str, entry: TableEntry) -> Result<()> {
        let mut schemas = self.schemas.write();
        let tables = schemas
            .get_mut(database)
            .ok_or_else(|| SqlError::UnknownDatabase(database.to_string()))?;
        // Re-registration replaces the entry.
        tables.insert(table.to_string(), entry);
        Ok(())
    }

    /// Returns the sharding key column of `table`, or `None` when the table
    /// is global or single.
    pub fn shard_key(&self, database: &str, table: &str) -> Result<Option<String>> {
        let schemas = self.schemas.read();
        let tables = schemas
            .get(database)
            .ok_or_else(|| SqlError::UnknownDatabase(database.to_string()))?;
        let entry = tables
            .get(table)
            .ok_or_else(|| SqlError::TableDoesntExist(table.to_string()))?;
        Ok(entry.shard_key.clone())
    }

    /// Enumerates the physical segments of `table`, in registration order.
    ///
    /// `None` bounds enumerate everything; slot bounds keep only the
    /// partitioned segments whose range intersects `[lower, upper)`.
    /// Non-partitioned segments ignore the bounds.
    pub fn lookup(
        &self,
        database: &str,
        table: &str,
        lower: Option<u32>,
        upper: Option<u32>,
    ) -> Result<Vec<Segment>> {
        let schemas = self.schemas.read();
        let tables = schemas
            .get(database)
            .ok_or_else(|| SqlError::UnknownDatabase(database.to_string()))?;
        let entry = tables
            .get(table)
            .ok_or_else(|| SqlError::TableDoesntExist(table.to_string()))?;

        if lower.is_none() && upper.is_none() {
            return Ok(entry.segments.clone());
        }
        let lo = lower.unwrap_or(0);
        let hi = upper.unwrap_or(shardgate_commons::constants::SLOT_SPACE);
        Ok(entry
            .segments
            .iter()
            .filter(|segment| match segment.range {
                Some(range) => range.overlaps(lo, hi),
                None => true,
            })
            .cloned()
            .collect())
    }
}
