//! Manual command - record an invoice entered by hand.

use chrono::NaiveDate;
use clap::Args;
use console::style;
use rust_decimal::Decimal;

use aura_core::invoice::rules::{parse_amount, parse_date};
use aura_core::InvoiceDraft;

use super::output::{format_record, OutputFormat};
use super::{load_config, open_service};

/// Arguments for the manual command.
#[derive(Args)]
pub struct ManualArgs {
    /// Invoice date (DD/MM/YYYY or YYYY-MM-DD)
    #[arg(short, long, value_parser = date_arg)]
    date: Option<NaiveDate>,

    /// Metal type (e.g. GOLD22K)
    #[arg(short, long)]
    metal: Option<String>,

    /// Amount without GST
    #[arg(long, value_parser = amount_arg)]
    net: Option<Decimal>,

    /// GST amount
    #[arg(long, value_parser = amount_arg)]
    gst: Option<Decimal>,

    /// Total amount including GST
    #[arg(long, value_parser = amount_arg)]
    total: Option<Decimal>,

    /// Owner of the invoice
    #[arg(short, long)]
    user_id: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{}', expected DD/MM/YYYY or YYYY-MM-DD", s))
}

fn amount_arg(s: &str) -> Result<Decimal, String> {
    parse_amount(s).ok_or_else(|| format!("invalid amount '{}'", s))
}

pub async fn run(args: ManualArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config);

    let draft = InvoiceDraft {
        user_id: args.user_id,
        invoice_date: args.date,
        metal_type: args.metal,
        amount_without_gst: args.net,
        gst_amount: args.gst,
        total_amount: args.total,
    };

    let record = service.create_manual(draft)?;

    print!("{}", format_record(&record, args.format)?);
    eprintln!("{} Stored invoice {}", style("✓").green(), record.id);

    Ok(())
}
