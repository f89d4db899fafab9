//! Delete command - remove a stored invoice.

use clap::Args;
use console::style;

use super::{load_config, open_service};

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Invoice id
    id: i64,
}

pub async fn run(args: DeleteArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let service = open_service(&config);

    if service.delete(args.id)? {
        println!("{} Deleted invoice {}", style("✓").green(), args.id);
    } else {
        println!("{} No invoice with id {}", style("ℹ").blue(), args.id);
    }

    Ok(())
}
