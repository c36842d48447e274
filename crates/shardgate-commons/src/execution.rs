//! Contract between the planner and the scatter/fan-out executor.
//!
//! A built plan hands the executor a request mode plus an ordered list of
//! `QueryTuple`s. The executor owns cross-backend ordering and retries; the
//! planner only decides *what* runs *where*.

use crate::models::BackendName;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// How the executor should dispatch a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RequestMode {
    /// Broadcast the raw query to every backend. Plans in this mode carry
    /// no tuples; the executor re-sends the original statement as-is.
    Scatter,

    /// Run each listed tuple on its named backend, in list order.
    Targeted,
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestMode::Scatter => write!(f, "scatter"),
            RequestMode::Targeted => write!(f, "targeted"),
        }
    }
}

/// One rewritten statement bound to one backend.
///
/// Field names serialise in the legacy PascalCase form the proxy has always
/// used in plan explain output.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct QueryTuple {
    /// Backend-qualified SQL text.
    #[cfg_attr(feature = "serde", serde(rename = "Query"))]
    pub sql: String,

    /// Backend the statement must run on.
    #[cfg_attr(feature = "serde", serde(rename = "Backend"))]
    pub backend: BackendName,

    /// Shard-range token of the segment, empty for non-partitioned tables.
    #[cfg_attr(feature = "serde", serde(rename = "Range"))]
    pub range: String,
}
