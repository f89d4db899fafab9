//! Invoice persistence.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::invoice::{InvoiceDraft, InvoiceRecord};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage for persisted invoices.
pub trait InvoiceStore {
    /// Persist a draft, assigning an identifier and timestamps.
    fn save(&self, draft: InvoiceDraft) -> Result<InvoiceRecord>;

    /// Look up a record by identifier.
    fn find(&self, id: i64) -> Result<Option<InvoiceRecord>>;

    /// All records owned by a user, in insertion order.
    fn find_by_user(&self, user_id: i64) -> Result<Vec<InvoiceRecord>>;

    /// All records dated within `start..=end`. Undated records never match.
    fn find_by_date_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<InvoiceRecord>>;

    /// Every record, in insertion order.
    fn find_all(&self) -> Result<Vec<InvoiceRecord>>;

    /// Remove a record. Returns `false` when no record had that identifier.
    fn delete(&self, id: i64) -> Result<bool>;
}

/// In-memory record table shared by the store implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordTable {
    next_id: i64,
    records: Vec<InvoiceRecord>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl RecordTable {
    fn insert(&mut self, draft: InvoiceDraft, now: NaiveDateTime) -> InvoiceRecord {
        let record = InvoiceRecord::from_draft(self.next_id, draft, now);
        self.next_id += 1;
        self.records.push(record.clone());
        record
    }

    fn find(&self, id: i64) -> Option<InvoiceRecord> {
        self.records.iter().find(|r| r.id == id).cloned()
    }

    fn filter(&self, predicate: impl Fn(&InvoiceRecord) -> bool) -> Vec<InvoiceRecord> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    fn by_user(&self, user_id: i64) -> Vec<InvoiceRecord> {
        self.filter(|r| r.user_id == Some(user_id))
    }

    fn between(&self, start: NaiveDate, end: NaiveDate) -> Vec<InvoiceRecord> {
        self.filter(|r| r.invoice_date.is_some_and(|d| start <= d && d <= end))
    }

    fn remove(&mut self, id: i64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}
