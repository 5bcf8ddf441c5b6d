use crate::ir::{Annotations, ServerConfig, Upstream};
use serde::{Deserialize, Serialize};

/// Declarative form of an [`IngressConfig`](crate::ir::IngressConfig), as a
/// producer writes it to disk.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IngressSnapshot {
    #[serde(default)]
    pub upstreams: Vec<Upstream>,

    #[serde(default)]
    pub servers: Vec<ServerSpec>,

    #[serde(default)]
    pub tcp_upstreams: Vec<LocationSpec>,

    #[serde(default)]
    pub udp_upstreams: Vec<LocationSpec>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServerSpec {
    pub name: String,

    #[serde(default)]
    pub ssl: bool,

    #[serde(default)]
    pub ssl_certificate: String,
    #[serde(default)]
    pub ssl_certificate_key: String,
    #[serde(default)]
    pub ssl_pem_checksum: String,

    /// Host policy overrides. `sslRedirect` must be a boolean.
    #[serde(default)]
    pub config: ServerConfig,

    #[serde(default)]
    pub locations: Vec<LocationSpec>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocationSpec {
    /// Path prefix for HTTP routes, listen port for raw TCP/UDP rules.
    pub path: String,

    /// Name of an upstream declared in the same snapshot.
    pub upstream: String,

    #[serde(default)]
    pub is_def_backend: bool,

    #[serde(default)]
    pub annotations: Annotations,
}
