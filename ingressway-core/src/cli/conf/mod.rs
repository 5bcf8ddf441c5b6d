mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Load a snapshot, order it and report what it contains
    Check {
        /// Path to the snapshot file (.json, .yaml, .yml or .hcl)
        path: PathBuf,

        /// Print errors without colors
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the ordered configuration
    Dump {
        /// Path to the snapshot file (.json, .yaml, .yml or .hcl)
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,

        /// Print the render view with redirect decisions resolved
        #[arg(long)]
        resolved: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump {
            path,
            json,
            yaml,
            resolved,
        } => dump(path, json, yaml, resolved),
    }
}
