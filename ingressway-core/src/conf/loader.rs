use crate::conf::error::ConfigError;
use crate::conf::lower::lower_snapshot;
use crate::conf::parse::parse_snapshot;
use crate::ir::IngressConfig;
use std::path::Path;
use tracing::info;

/// Reads, parses and lowers a snapshot file into a sorted [`IngressConfig`].
pub fn load_ingress_config(path: &Path) -> Result<IngressConfig, ConfigError> {
    let snapshot = parse_snapshot(path)?;
    let ingress = lower_snapshot(snapshot)?;

    info!(
        path = %path.display(),
        upstreams = ingress.upstreams.len(),
        servers = ingress.servers.len(),
        "loaded ingress configuration"
    );

    Ok(ingress)
}
