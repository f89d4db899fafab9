//! Summary command - revenue totals across stored invoices.

use clap::Args;

use super::output::{format_summary, OutputFormat};
use super::{load_config, open_service};

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub async fn run(args: SummaryArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config);

    let summary = service.revenue_summary()?;
    print!("{}", format_summary(&summary, args.format)?);

    Ok(())
}
