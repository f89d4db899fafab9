//! Configuration structures for the ingestion pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the aura pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuraConfig {
    /// CSV ledger configuration.
    pub ledger: LedgerConfig,

    /// Invoice store configuration.
    pub store: StoreConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Location of the append-only CSV ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Directory holding the ledger file, created on first write.
    pub output_dir: PathBuf,

    /// Ledger file name inside `output_dir`.
    pub file_name: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            file_name: "invoices_parsed.csv".to_string(),
        }
    }
}

impl LedgerConfig {
    /// Full (possibly relative) path of the ledger file.
    pub fn path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

/// Invoice store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding the persisted invoice table.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output/invoices.json"),
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Forward the raw decoded document text to the diagnostic sink.
    pub log_raw_text: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self { log_raw_text: true }
    }
}

impl AuraConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
