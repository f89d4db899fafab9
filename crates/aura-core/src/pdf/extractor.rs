//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{DocumentReader, Result};
use crate::error::PdfError;

/// Document reader for text-based PDF invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextReader;

impl PdfTextReader {
    pub fn new() -> Self {
        Self
    }

    /// Load the document, returning bytes that pdf-extract can read.
    ///
    /// Documents encrypted with an empty user password are decrypted and
    /// re-serialized; any other encryption is rejected.
    fn prepare(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw = if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        Ok(raw)
    }
}

impl DocumentReader for PdfTextReader {
    fn read_text(&self, data: &[u8]) -> Result<String> {
        let raw = self.prepare(data)?;
        let text = pdf_extract::extract_text_from_mem(&raw)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        debug!("Extracted {} characters of PDF text", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_is_parse_error() {
        let err = PdfTextReader::new().read_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        let err = PdfTextReader::new().read_text(&[]).unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }
}
