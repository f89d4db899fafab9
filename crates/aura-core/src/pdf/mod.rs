//! PDF processing module.

mod extractor;

pub use extractor::PdfTextReader;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for turning a binary document into its visible text.
pub trait DocumentReader {
    /// Extract the text of every page, in page order.
    fn read_text(&self, data: &[u8]) -> Result<String>;
}
