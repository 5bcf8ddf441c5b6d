use crate::conf::error::ConfigError;
use crate::conf::types::IngressSnapshot;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Json,
    Yaml,
    Hcl,
}

impl SnapshotFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("hcl") => Ok(Self::Hcl),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub fn parse_snapshot(path: &Path) -> Result<IngressSnapshot, ConfigError> {
    let format = SnapshotFormat::from_path(path)?;
    let s = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_snapshot_str(&s, format, path)
}

/// Parses snapshot text. `origin` is only used in error messages.
pub fn parse_snapshot_str(
    s: &str,
    format: SnapshotFormat,
    origin: &Path,
) -> Result<IngressSnapshot, ConfigError> {
    match format {
        SnapshotFormat::Json => serde_json::from_str(s).map_err(|e| ConfigError::parse(origin, e)),
        SnapshotFormat::Yaml => serde_yaml::from_str(s).map_err(|e| ConfigError::parse(origin, e)),
        SnapshotFormat::Hcl => hcl::from_str(s).map_err(|e| ConfigError::parse(origin, e)),
    }
}
