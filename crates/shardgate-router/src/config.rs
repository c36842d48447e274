//! Proxy topology configuration.
//!
//! The router only needs to know which backends exist and how many physical
//! partitions a hash table gets by default; both come from the proxy's
//! topology file.

use serde::Deserialize;
use shardgate_commons::constants::{DEFAULT_PARTITIONS, SLOT_SPACE};
use shardgate_commons::errors::{Result, SqlError};

/// Backend topology used to build a [`crate::ShardRouter`].
#[derive(Debug, Clone, Deserialize)]
pub struct TopologyConfig {
    /// Ordered backend names; hash partitions are assigned round-robin
    /// over this list.
    pub backends: Vec<String>,

    /// Partition count for hash tables registered without an explicit one.
    #[serde(default = "default_partitions")]
    pub default_partitions: u32,
}

fn default_partitions() -> u32 {
    DEFAULT_PARTITIONS
}

impl TopologyConfig {
    /// Parses a topology description from JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: TopologyConfig = serde_json::from_str(raw)
            .map_err(|e| SqlError::internal(format!("topology.config.parse.error: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects topologies the router cannot route over.
    pub fn validate(&self) -> Result<()> {
        if self.backends.is_empty() {
            return Err(SqlError::internal("topology.config.no.backends"));
        }
        if self.default_partitions == 0 || self.default_partitions > SLOT_SPACE {
            return Err(SqlError::internal(format!(
                "topology.config.invalid.partitions: {}",
                self.default_partitions
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_topology() {
        let config = TopologyConfig::from_json(
            r#"{"backends": ["backend0", "backend1"], "default_partitions": 8}"#,
        )
        .unwrap();
        assert_eq!(config.backends.len(), 2);
        assert_eq!(config.default_partitions, 8);
    }

    #[test]
    fn test_default_partition_count() {
        let config = TopologyConfig::from_json(r#"{"backends": ["backend0"]}"#).unwrap();
        assert_eq!(config.default_partitions, DEFAULT_PARTITIONS);
    }

    #[test]
    fn test_empty_backends_rejected() {
        let err = TopologyConfig::from_json(r#"{"backends": []}"#).unwrap_err();
        assert_eq!(err.to_string(), "topology.config.no.backends");
    }

    #[test]
    fn test_zero_partitions_rejected() {
        let err = TopologyConfig::from_json(
            r#"{"backends": ["backend0"], "default_partitions": 0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("topology.config.invalid.partitions"));
    }
}
