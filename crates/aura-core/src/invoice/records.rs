//! Positional CSV record parser for tabular invoice uploads.
//!
//! Expected layout, after a mandatory header line:
//!
//! ```text
//! [userId,]invoiceDate,metalType,amountWithoutGst,gstAmount,totalAmount
//! ```
//!
//! Columns are split on every comma; quoted fields are not supported.

use tracing::{debug, trace};

use crate::models::invoice::InvoiceDraft;

use super::rules::{parse_amount, parse_date};
use super::InvoiceParser;

/// Minimum column count for a line to be considered an invoice.
pub const MIN_COLUMNS: usize = 5;

/// Parser for comma-separated invoice rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvRecordParser;

impl CsvRecordParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a single data line. Returns `None` for blank or short lines.
    pub fn parse_line(&self, line: &str) -> Option<InvoiceDraft> {
        if line.trim().is_empty() {
            return None;
        }

        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() < MIN_COLUMNS {
            trace!("Skipping line with {} columns", parts.len());
            return None;
        }

        // A leading integer column is the owning user id.
        let user_id = parts[0].trim().parse::<i64>().ok();
        let mut columns = parts.iter().skip(usize::from(user_id.is_some()));

        let mut draft = InvoiceDraft {
            user_id,
            ..Default::default()
        };
        draft.invoice_date = columns.next().and_then(|c| parse_date(c));
        draft.metal_type = columns.next().map(|c| c.trim().to_string());
        draft.amount_without_gst = columns.next().and_then(|c| parse_amount(c));
        draft.gst_amount = columns.next().and_then(|c| parse_amount(c));
        draft.total_amount = columns.next().and_then(|c| parse_amount(c));

        Some(draft)
    }
}

impl InvoiceParser for CsvRecordParser {
    fn parse(&self, text: &str) -> Vec<InvoiceDraft> {
        let drafts: Vec<InvoiceDraft> = text
            .lines()
            .skip(1)
            .filter_map(|line| self.parse_line(line))
            .collect();

        debug!("Parsed {} invoice rows from CSV", drafts.len());
        drafts
    }
}
