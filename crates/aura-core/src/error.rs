//! Error types for the aura-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the aura library.
#[derive(Error, Debug)]
pub enum AuraError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Invoice extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Ledger write error.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Invoice store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to invoice extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The upload payload is not valid UTF-8 text.
    #[error("upload is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// No invoice data could be extracted.
    #[error("no invoice data found")]
    NoData,
}

/// Errors raised while appending to the CSV ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger directory could not be created.
    #[error("failed to create ledger directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ledger file could not be opened or written.
    #[error("failed to write invoice ledger {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by invoice store implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backing file could not be read or written.
    #[error("store I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file holds data that is not a record table.
    #[error("corrupt store file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-process lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type for the aura library.
pub type Result<T> = std::result::Result<T, AuraError>;
