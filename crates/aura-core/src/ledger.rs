//! Append-only CSV ledger of processed invoices.
//!
//! Each call appends one line:
//!
//! ```text
//! invoiceDate,metalType,amountWithoutGst,gstAmount,totalAmount
//! 2025-10-28,SILVER24,970.87,29.13,1000
//! ```
//!
//! Field values are not quoted. They are dates, decimals, and short product
//! codes, so a comma inside a value would corrupt the line.

use std::fmt::Display;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{debug, info};

use crate::error::LedgerError;
use crate::models::config::LedgerConfig;
use crate::models::invoice::InvoiceDraft;

/// Header line written when the ledger file is created.
pub const LEDGER_HEADER: &str = "invoiceDate,metalType,amountWithoutGst,gstAmount,totalAmount";

/// Writer appending invoice drafts to a ledger file.
#[derive(Debug, Clone)]
pub struct LedgerWriter {
    path: PathBuf,
}

impl LedgerWriter {
    /// Create a writer for the given ledger file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a writer for the configured ledger location.
    pub fn from_config(config: &LedgerConfig) -> Self {
        Self::new(config.path())
    }

    /// Path of the ledger file as configured.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one draft, writing the header first if the file is new.
    ///
    /// Returns the absolute path of the ledger file.
    pub fn append(&self, draft: &InvoiceDraft) -> Result<PathBuf, LedgerError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| LedgerError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let (mut file, created) = self.open().map_err(|e| self.write_error(e))?;

        let buf = encode(draft, created).map_err(|e| self.write_error(e))?;
        file.write_all(&buf).map_err(|e| self.write_error(e))?;

        if created {
            info!("Created invoice ledger at {}", self.path.display());
        }
        debug!("Appended invoice to ledger {}", self.path.display());

        std::path::absolute(&self.path).map_err(|e| self.write_error(e))
    }

    /// Open the ledger for appending, reporting whether this call created it.
    fn open(&self) -> io::Result<(File, bool)> {
        match OpenOptions::new().append(true).create_new(true).open(&self.path) {
            Ok(file) => Ok((file, true)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                let file = OpenOptions::new().append(true).open(&self.path)?;
                Ok((file, false))
            }
            Err(e) => Err(e),
        }
    }

    fn write_error(&self, source: io::Error) -> LedgerError {
        LedgerError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Encode one ledger line, preceded by the header when `header` is set.
///
/// The whole buffer is written with a single `write_all`.
fn encode(draft: &InvoiceDraft, header: bool) -> io::Result<Vec<u8>> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if header {
        wtr.write_record(LEDGER_HEADER.split(','))?;
    }
    wtr.write_record([
        field(draft.invoice_date.as_ref()),
        field(draft.metal_type.as_ref()),
        field(draft.amount_without_gst.as_ref()),
        field(draft.gst_amount.as_ref()),
        field(draft.total_amount.as_ref()),
    ])?;

    wtr.into_inner().map_err(|e| e.into_error())
}

fn field<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}
