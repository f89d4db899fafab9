//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod delete;
pub mod list;
pub mod manual;
pub mod output;
pub mod summary;
pub mod upload;

use std::path::Path;

use tracing::debug;

use aura_core::{AuraConfig, InvoiceService, JsonFileStore, PdfTextReader};

/// Service type used by every command.
pub type Service = InvoiceService<JsonFileStore, PdfTextReader>;

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AuraConfig> {
    if let Some(path) = config_path {
        return Ok(AuraConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config at {}", default_path.display());
        Ok(AuraConfig::from_file(&default_path)?)
    } else {
        Ok(AuraConfig::default())
    }
}

/// Build the service backed by the configured JSON store and ledger.
pub fn open_service(config: &AuraConfig) -> Service {
    let store = JsonFileStore::new(config.store.path.clone());
    InvoiceService::from_config(config, store, PdfTextReader::new())
}
