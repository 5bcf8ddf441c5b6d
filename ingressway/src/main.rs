use clap::{Parser, Subcommand};
use ingressway_core::cli::conf::{self, ConfigCmd};
use ingressway_core::logging::{LogMode, default_log_mode, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "ingressway",
    version,
    about = "Ingressway: ordered, reload-stable proxy routing configuration"
)]
struct Cli {
    /// Emit JSON logs even on a terminal
    #[arg(long, global = true)]
    raw_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Snapshot tooling
    Conf {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mode = if cli.raw_logs {
        LogMode::Raw
    } else {
        default_log_mode()
    };
    init_logging(mode);

    match cli.command {
        Command::Conf { cmd } => {
            tracing::debug!(?cmd, "running conf command");
            conf::run(cmd)
        }
    }
}
