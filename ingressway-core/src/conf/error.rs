use crate::ir::IrError;
use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read snapshot file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("unsupported snapshot format: {path} (expected .json, .yaml, .yml or .hcl)")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    // Lowering
    #[error("location '{location}' references unknown upstream '{upstream}'")]
    UnknownUpstream { location: String, upstream: String },

    #[error(transparent)]
    Ir(#[from] IrError),
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, reason: impl Display) -> Self {
        Self::Parse {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
