//! CLI application for NFS-e batch extraction and per-CNPJ reporting.

mod commands;
mod report;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, payers};

/// NFS-e report generator - extract invoices from fixed-layout PDFs
/// and aggregate them per CNPJ
#[derive(Parser)]
#[command(name = "notar")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a flat folder of PDFs, filtered by issue-date range
    Batch(batch::BatchArgs),

    /// Process per-payer subfolders (one CNPJ per subfolder)
    Payers(payers::PayersArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Batch(args) => batch::run(args).await,
        Commands::Payers(args) => payers::run(args).await,
    }
}
