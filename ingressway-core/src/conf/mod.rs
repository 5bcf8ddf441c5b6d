pub mod error;
mod loader;
mod lower;
mod parse;
pub mod types;

pub use error::ConfigError;
pub use loader::load_ingress_config;
pub use lower::lower_snapshot;
pub use parse::{SnapshotFormat, parse_snapshot, parse_snapshot_str};
pub use types::IngressSnapshot;
