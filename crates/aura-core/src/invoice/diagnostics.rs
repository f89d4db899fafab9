//! Diagnostic sinks receiving extraction events for pattern tuning.
//!
//! Diagnostics are advisory: nothing in the pipeline depends on what a sink
//! does with an event.

use tracing::{debug, warn};

/// Receiver of extraction diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Full decoded text of a document about to be parsed.
    fn raw_text(&self, text: &str);

    /// Core fields that could not be extracted from a document.
    fn missing_fields(&self, fields: &[&'static str]);
}

/// Sink emitting `tracing` events under the `aura::diagnostics` target.
#[derive(Debug, Clone)]
pub struct TracingSink {
    log_raw_text: bool,
}

impl TracingSink {
    pub fn new() -> Self {
        Self { log_raw_text: true }
    }

    /// Whether the raw document text is emitted at all.
    pub fn with_raw_text(mut self, enabled: bool) -> Self {
        self.log_raw_text = enabled;
        self
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for TracingSink {
    fn raw_text(&self, text: &str) {
        if self.log_raw_text {
            debug!(target: "aura::diagnostics", chars = text.len(), "raw document text:\n{}", text);
        }
    }

    fn missing_fields(&self, fields: &[&'static str]) {
        warn!(target: "aura::diagnostics", missing = ?fields, "parsed invoice with missing fields");
    }
}

/// Sink that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn raw_text(&self, _text: &str) {}

    fn missing_fields(&self, _fields: &[&'static str]) {}
}
