//! Core library for bullion invoice ingestion.
//!
//! This crate provides:
//! - PDF text extraction
//! - Rule-based extraction of invoice fields (date, metal type, net, GST, total)
//! - Positional CSV row parsing with an optional leading user id
//! - Net amount backfill from total and GST
//! - An append-only CSV ledger and pluggable invoice stores

pub mod error;
pub mod invoice;
pub mod ledger;
pub mod models;
pub mod pdf;
pub mod service;
pub mod store;

pub use error::{AuraError, Result};
pub use invoice::{backfill_amounts, CsvRecordParser, InvoiceParser, TextFieldExtractor};
pub use ledger::{LedgerWriter, LEDGER_HEADER};
pub use models::config::AuraConfig;
pub use models::invoice::{InvoiceDraft, InvoiceRecord, RevenueSummary};
pub use pdf::{DocumentReader, PdfTextReader};
pub use service::{InvoiceService, Upload, UploadKind, UploadOutcome};
pub use store::{InvoiceStore, JsonFileStore, MemoryStore};
