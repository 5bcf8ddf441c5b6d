use serde::{Deserialize, Deserializer, Serialize};

/// A single backend endpoint inside an upstream pool.
///
/// The port is kept exactly as the producer supplied it so that named
/// service ports (e.g. `"http"`) survive untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct UpstreamServer {
    /// Host name or IP address, e.g. "10.0.0.1"
    pub address: String,

    #[serde(deserialize_with = "port_as_string")]
    pub port: String,
}

impl UpstreamServer {
    pub fn new(address: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            port: port.into(),
        }
    }
}

/// A named pool of backends. An empty pool is valid and means that no
/// backend is currently available.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Upstream {
    pub name: String,

    #[serde(default)]
    pub backends: Vec<UpstreamServer>,
}

impl Upstream {
    /// Creates an upstream without backends.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            backends: Vec::new(),
        }
    }

    pub fn with_backends(name: impl Into<String>, backends: Vec<UpstreamServer>) -> Self {
        Self {
            name: name.into(),
            backends,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

// YAML and JSON producers tend to write `port: 80`; accept that and keep it as text.
fn port_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Named(String),
        Number(u64),
    }

    Ok(match Port::deserialize(deserializer)? {
        Port::Named(name) => name,
        Port::Number(number) => number.to_string(),
    })
}
