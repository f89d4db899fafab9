//! List command - show stored invoices.

use chrono::NaiveDate;
use clap::Args;

use aura_core::invoice::rules::parse_date;

use super::output::{format_records, OutputFormat};
use super::{load_config, open_service};

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only invoices owned by this user, oldest first
    #[arg(short, long, conflicts_with_all = ["from", "to"])]
    user: Option<i64>,

    /// Start of an inclusive date range
    #[arg(long, value_parser = date_arg, requires = "to")]
    from: Option<NaiveDate>,

    /// End of an inclusive date range
    #[arg(long, value_parser = date_arg, requires = "from")]
    to: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).ok_or_else(|| format!("invalid date '{}'", s))
}

pub async fn run(args: ListArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config);

    let records = match (args.user, args.from, args.to) {
        (Some(user_id), _, _) => service.list_for_user(user_id)?,
        (None, Some(from), Some(to)) => service.list_between(from, to)?,
        _ => service.list_all()?,
    };

    print!("{}", format_records(&records, args.format)?);

    Ok(())
}
