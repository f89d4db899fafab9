//! Invoice field extraction module.

mod backfill;
pub mod diagnostics;
mod parser;
mod records;
pub mod rules;

pub use backfill::backfill_amounts;
pub use diagnostics::{DiagnosticSink, NullSink, TracingSink};
pub use parser::TextFieldExtractor;
pub use records::{CsvRecordParser, MIN_COLUMNS};

use crate::models::invoice::InvoiceDraft;

/// Trait for turning decoded upload text into invoice drafts.
///
/// Parsing never fails: unmatched fields are absent and unusable rows are
/// dropped, so an empty vector is the only "nothing found" signal.
pub trait InvoiceParser {
    /// Parse drafts from text, preserving source order.
    fn parse(&self, text: &str) -> Vec<InvoiceDraft>;
}
