use crate::ir::{ServerId, Upstream};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-route overrides keyed by annotation name.
pub type Annotations = BTreeMap<String, String>;

/// A routing rule: a path prefix forwarded to an upstream pool.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Location {
    /// Path prefix, e.g. "/api"
    pub path: String,

    /// Marks the catch-all route of a host.
    #[serde(default)]
    pub is_def_backend: bool,

    /// Snapshot of the target pool taken when the route was built.
    pub upstream: Upstream,

    #[serde(default)]
    pub annotations: Annotations,

    /// Owning host. Raw TCP/UDP rules have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerId>,
}

impl Location {
    pub fn new(path: impl Into<String>, upstream: Upstream) -> Self {
        Self {
            path: path.into(),
            upstream,
            ..Default::default()
        }
    }

    pub fn with_annotation(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), value.into());
        self
    }
}
