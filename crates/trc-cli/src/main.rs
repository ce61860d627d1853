//! trc entry point.
//!
//! Thin by intent: sets up tracing and dispatches to the command handlers
//! in `commands/`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "trc")]
#[command(about = "Reconcile trade bookings across two systems of record", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile two trade feeds and print or export the results
    Run(commands::run::RunArgs),
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Commands::Run(args) => commands::run::run(args),
    }
}

fn init_tracing() {
    // Logs go to stderr so stdout stays parseable report output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
