use crate::ir::Location;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Position of a [`Server`] inside [`IngressConfig::servers`](crate::ir::IngressConfig).
///
/// Routes refer to their owning host through this index instead of a
/// pointer. [`IngressConfig::sort`](crate::ir::IngressConfig::sort) keeps
/// the indices valid when hosts are reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ServerId(pub usize);

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "server#{}", self.0)
    }
}

/// Host level policy overrides.
///
/// Only `sslRedirect` is interpreted. Every other key is carried along
/// untouched for the renderer.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(
        rename = "sslRedirect",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ssl_redirect: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ServerConfig {
    pub fn with_ssl_redirect(ssl_redirect: bool) -> Self {
        Self {
            ssl_redirect: Some(ssl_redirect),
            ..Default::default()
        }
    }
}

/// A virtual host.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Server {
    /// Host name, e.g. "shop.example.com"
    pub name: String,

    #[serde(default)]
    pub locations: Vec<Location>,

    /// Whether this host terminates TLS.
    #[serde(default)]
    pub ssl: bool,

    /// Owned by certificate management; never read here.
    #[serde(default)]
    pub ssl_certificate: String,
    #[serde(default)]
    pub ssl_certificate_key: String,
    #[serde(default)]
    pub ssl_pem_checksum: String,

    #[serde(default, rename = "config")]
    cfg: ServerConfig,
}

impl Server {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Replaces the configuration bag. There is no merge: the caller passes
    /// the complete set of overrides.
    pub fn set_cfg(&mut self, cfg: ServerConfig) {
        self.cfg = cfg;
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.cfg
    }
}
