//! Text field extractor for decoded invoice documents.

use std::sync::Arc;

use tracing::debug;

use crate::models::invoice::InvoiceDraft;

use super::diagnostics::{DiagnosticSink, TracingSink};
use super::rules::{
    extract_gst_amount, extract_invoice_date, extract_metal_type, extract_net_amount,
    extract_total_amount,
};
use super::InvoiceParser;

/// Extracts the five core invoice fields from document text.
///
/// Each field is computed independently; the draft is assembled from the
/// results once all of them are known.
#[derive(Clone)]
pub struct TextFieldExtractor {
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl TextFieldExtractor {
    /// Create an extractor reporting to a [`TracingSink`].
    pub fn new() -> Self {
        Self {
            diagnostics: Arc::new(TracingSink::new()),
        }
    }

    /// Replace the diagnostic sink.
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Extract a draft from document text. `user_id` is always unset.
    pub fn extract(&self, text: &str) -> InvoiceDraft {
        self.diagnostics.raw_text(text);

        let draft = InvoiceDraft {
            user_id: None,
            invoice_date: extract_invoice_date(text),
            metal_type: extract_metal_type(text),
            amount_without_gst: extract_net_amount(text),
            gst_amount: extract_gst_amount(text),
            total_amount: extract_total_amount(text),
        };

        let missing = draft.missing_fields();
        if !missing.is_empty() {
            self.diagnostics.missing_fields(&missing);
        }

        debug!(
            "Extracted invoice fields from {} characters ({} missing)",
            text.len(),
            missing.len()
        );

        draft
    }
}

impl Default for TextFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceParser for TextFieldExtractor {
    fn parse(&self, text: &str) -> Vec<InvoiceDraft> {
        vec![self.extract(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::Mutex;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[derive(Default)]
    struct RecordingSink {
        raw: Mutex<Vec<String>>,
        missing: Mutex<Vec<Vec<&'static str>>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn raw_text(&self, text: &str) {
            self.raw.lock().unwrap().push(text.to_string());
        }

        fn missing_fields(&self, fields: &[&'static str]) {
            self.missing.lock().unwrap().push(fields.to_vec());
        }
    }

    const SAMPLE: &str = "\
AURA BULLION PVT LTD
Tax Invoice
Date: 2025-10-28
Description Qty Rate Amount
SILVER24 6.4604 150.28 970.87
GST(3%) 29.13
TOTAL INVOICE VALUE 1000
";

    #[test]
    fn test_extract_sample_invoice() {
        let draft = TextFieldExtractor::new().extract(SAMPLE);

        assert_eq!(
            draft,
            InvoiceDraft {
                user_id: None,
                invoice_date: NaiveDate::from_ymd_opt(2025, 10, 28),
                metal_type: Some("SILVER24".to_string()),
                amount_without_gst: Some(dec("970.87")),
                gst_amount: Some(dec("29.13")),
                total_amount: Some(dec("1000")),
            }
        );
    }

    #[test]
    fn test_extract_large_gold_invoice() {
        let text = "Goldsmiths Bullion Pvt Ltd\n\
                    Date: 2025-10-28\n\
                    GOLD22K 10.000 6,500.00 65,000.00\n\
                    GST(3%) 1,950.00\n\
                    TOTAL INVOICE VALUE 66,950.00\n";
        let draft = TextFieldExtractor::new().extract(text);

        assert_eq!(draft.metal_type.as_deref(), Some("GOLD22K"));
        assert_eq!(draft.amount_without_gst, Some(dec("65000.00")));
        assert_eq!(draft.gst_amount, Some(dec("1950.00")));
        assert_eq!(draft.total_amount, Some(dec("66950.00")));
    }

    #[test]
    fn test_missing_fields_do_not_block_others() {
        let text = "Receipt\nGST(3%) 3.00\n";
        let draft = TextFieldExtractor::new().extract(text);

        assert_eq!(draft.gst_amount, Some(dec("3.00")));
        assert_eq!(draft.invoice_date, None);
        assert_eq!(draft.metal_type, None);
        assert_eq!(draft.amount_without_gst, None);
        assert_eq!(draft.total_amount, None);
    }

    #[test]
    fn test_diagnostics_receive_raw_text_and_missing_fields() {
        let sink = Arc::new(RecordingSink::default());
        let extractor = TextFieldExtractor::new().with_diagnostics(sink.clone());

        extractor.extract("TOTAL INVOICE VALUE 50");

        assert_eq!(*sink.raw.lock().unwrap(), vec!["TOTAL INVOICE VALUE 50".to_string()]);
        assert_eq!(
            *sink.missing.lock().unwrap(),
            vec![vec!["invoice_date", "metal_type", "amount_without_gst", "gst_amount"]]
        );
    }

    #[test]
    fn test_complete_extraction_reports_nothing_missing() {
        let sink = Arc::new(RecordingSink::default());
        TextFieldExtractor::new()
            .with_diagnostics(sink.clone())
            .extract(SAMPLE);

        assert!(sink.missing.lock().unwrap().is_empty());
    }

    #[test]
    fn test_parse_yields_single_draft() {
        let drafts = TextFieldExtractor::new().parse("nothing useful");
        assert_eq!(drafts, vec![InvoiceDraft::default()]);
    }
}
