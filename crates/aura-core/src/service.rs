//! Invoice ingestion service.
//!
//! Ties the parsers, the amount backfill, the invoice store, and the CSV
//! ledger together. An upload is persisted to the store first and appended
//! to the ledger second; the two writes are independent, so a ledger failure
//! leaves the stored record in place and is reported as an error.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{error, info, warn};

use crate::error::{ExtractionError, Result};
use crate::invoice::{
    backfill_amounts, CsvRecordParser, InvoiceParser, TextFieldExtractor, TracingSink,
};
use crate::ledger::LedgerWriter;
use crate::models::config::AuraConfig;
use crate::models::invoice::{InvoiceDraft, InvoiceRecord, RevenueSummary};
use crate::pdf::DocumentReader;
use crate::store::InvoiceStore;

/// How an upload is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// Comma-separated rows.
    Csv,
    /// Binary document decoded to text first.
    Document,
}

impl UploadKind {
    /// Classify by declared content type and file name.
    ///
    /// Either one containing "csv" (case-insensitive) selects CSV.
    pub fn classify(content_type: Option<&str>, file_name: Option<&str>) -> Self {
        let mentions_csv = |s: Option<&str>| s.is_some_and(|s| s.to_lowercase().contains("csv"));
        if mentions_csv(content_type) || mentions_csv(file_name) {
            Self::Csv
        } else {
            Self::Document
        }
    }
}

/// An uploaded file.
#[derive(Debug, Clone, Default)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Upload {
    pub fn new(data: Vec<u8>) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn kind(&self) -> UploadKind {
        UploadKind::classify(self.content_type.as_deref(), self.file_name.as_deref())
    }
}

/// Result of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Record as stored.
    pub record: InvoiceRecord,
    /// Absolute path of the ledger the record was appended to.
    pub ledger_path: PathBuf,
}

/// Invoice ingestion and query façade.
pub struct InvoiceService<S, R> {
    store: S,
    reader: R,
    extractor: TextFieldExtractor,
    csv: CsvRecordParser,
    ledger: LedgerWriter,
}

impl<S: InvoiceStore, R: DocumentReader> InvoiceService<S, R> {
    /// Create a service with a default text extractor.
    pub fn new(store: S, reader: R, ledger: LedgerWriter) -> Self {
        Self {
            store,
            reader,
            extractor: TextFieldExtractor::new(),
            csv: CsvRecordParser::new(),
            ledger,
        }
    }

    /// Create a service wired from configuration.
    pub fn from_config(config: &AuraConfig, store: S, reader: R) -> Self {
        let sink = TracingSink::new().with_raw_text(config.extraction.log_raw_text);
        Self::new(store, reader, LedgerWriter::from_config(&config.ledger))
            .with_extractor(TextFieldExtractor::new().with_diagnostics(Arc::new(sink)))
    }

    /// Replace the document text extractor.
    pub fn with_extractor(mut self, extractor: TextFieldExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn ledger(&self) -> &LedgerWriter {
        &self.ledger
    }

    /// Parse an upload into drafts without persisting anything.
    pub fn parse_upload(&self, upload: &Upload) -> Result<Vec<InvoiceDraft>> {
        let drafts = match upload.kind() {
            UploadKind::Csv => {
                let text = std::str::from_utf8(&upload.data).map_err(ExtractionError::from)?;
                self.csv.parse(text)
            }
            UploadKind::Document => {
                let text = self.reader.read_text(&upload.data)?;
                self.extractor.parse(&text)
            }
        };
        Ok(drafts)
    }

    /// Ingest the first invoice of an upload.
    ///
    /// An explicit `user_id` overrides any id found in the file.
    pub fn upload(&self, upload: &Upload, user_id: Option<i64>) -> Result<UploadOutcome> {
        let draft = self
            .parse_upload(upload)?
            .into_iter()
            .next()
            .ok_or(ExtractionError::NoData)?;
        self.ingest(draft, user_id)
    }

    /// Ingest every invoice of an upload, in file order.
    ///
    /// Stops at the first failure; rows already ingested stay persisted.
    pub fn upload_all(&self, upload: &Upload, user_id: Option<i64>) -> Result<Vec<UploadOutcome>> {
        let drafts = self.parse_upload(upload)?;
        if drafts.is_empty() {
            return Err(ExtractionError::NoData.into());
        }
        drafts
            .into_iter()
            .map(|draft| self.ingest(draft, user_id))
            .collect()
    }

    fn ingest(&self, mut draft: InvoiceDraft, user_id: Option<i64>) -> Result<UploadOutcome> {
        if user_id.is_some() {
            draft.user_id = user_id;
        }
        let draft = backfill_amounts(draft);

        let record = self.store.save(draft.clone())?;
        let ledger_path = self.ledger.append(&draft).inspect_err(|e| {
            error!(
                "Invoice {} was stored but not appended to the ledger: {}",
                record.id, e
            );
        })?;

        info!("Ingested invoice {}", record.id);
        Ok(UploadOutcome {
            record,
            ledger_path,
        })
    }

    /// Persist a manually entered invoice. Manual entries skip the ledger.
    pub fn create_manual(&self, draft: InvoiceDraft) -> Result<InvoiceRecord> {
        let record = self.store.save(backfill_amounts(draft))?;
        info!("Created manual invoice {}", record.id);
        Ok(record)
    }

    pub fn find(&self, id: i64) -> Result<Option<InvoiceRecord>> {
        Ok(self.store.find(id)?)
    }

    pub fn list_all(&self) -> Result<Vec<InvoiceRecord>> {
        Ok(self.store.find_all()?)
    }

    /// A user's invoices, oldest first, undated ones last.
    pub fn list_for_user(&self, user_id: i64) -> Result<Vec<InvoiceRecord>> {
        let mut records = self.store.find_by_user(user_id)?;
        records.sort_by_key(|r| (r.invoice_date.is_none(), r.invoice_date));
        Ok(records)
    }

    /// Invoices dated within `start..=end`.
    pub fn list_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<InvoiceRecord>> {
        if start > end {
            warn!("Empty date range {} .. {}", start, end);
        }
        Ok(self.store.find_by_date_between(start, end)?)
    }

    pub fn revenue_summary(&self) -> Result<RevenueSummary> {
        let records = self.store.find_all()?;
        Ok(RevenueSummary::from_records(&records))
    }

    /// Delete an invoice. Deleting an unknown id is a no-op returning `false`.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let removed = self.store.delete(id)?;
        if removed {
            info!("Deleted invoice {}", id);
        } else {
            warn!("Delete requested for unknown invoice {}", id);
        }
        Ok(removed)
    }
}
