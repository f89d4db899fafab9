//! CLI application for bullion invoice ingestion.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, delete, list, manual, summary, upload};

/// Bullion invoice ledger - Extract, store, and summarize gold/silver invoices
#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a single invoice file (PDF or CSV)
    Upload(upload::UploadArgs),

    /// Upload multiple invoice files
    Batch(batch::BatchArgs),

    /// Record an invoice entered by hand
    Manual(manual::ManualArgs),

    /// List stored invoices
    List(list::ListArgs),

    /// Show revenue totals
    Summary(summary::SummaryArgs),

    /// Delete a stored invoice
    Delete(delete::DeleteArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
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
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Upload(args) => upload::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Manual(args) => manual::run(args, config_path).await,
        Commands::List(args) => list::run(args, config_path).await,
        Commands::Summary(args) => summary::run(args, config_path).await,
        Commands::Delete(args) => delete::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
