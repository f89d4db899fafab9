//! Process-local invoice store.

use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;

use super::{now, InvoiceStore, RecordTable, Result};
use crate::error::StoreError;
use crate::models::invoice::{InvoiceDraft, InvoiceRecord};

/// Invoice store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: Mutex<RecordTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn table(&self) -> Result<MutexGuard<'_, RecordTable>> {
        self.table.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl InvoiceStore for MemoryStore {
    fn save(&self, draft: InvoiceDraft) -> Result<InvoiceRecord> {
        Ok(self.table()?.insert(draft, now()))
    }

    fn find(&self, id: i64) -> Result<Option<InvoiceRecord>> {
        Ok(self.table()?.find(id))
    }

    fn find_by_user(&self, user_id: i64) -> Result<Vec<InvoiceRecord>> {
        Ok(self.table()?.by_user(user_id))
    }

    fn find_by_date_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<InvoiceRecord>> {
        Ok(self.table()?.between(start, end))
    }

    fn find_all(&self) -> Result<Vec<InvoiceRecord>> {
        Ok(self.table()?.records.clone())
    }

    fn delete(&self, id: i64) -> Result<bool> {
        Ok(self.table()?.remove(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_assigns_ids_and_timestamps() {
        let store = MemoryStore::new();
        let a = store.save(InvoiceDraft::default()).unwrap();
        let b = store.save(InvoiceDraft::default()).unwrap();

        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.find(2).unwrap(), Some(b));
        assert_eq!(store.find_all().unwrap().len(), 2);
    }

    #[test]
    fn test_delete_missing_is_false() {
        let store = MemoryStore::new();
        let record = store.save(InvoiceDraft::default()).unwrap();

        assert!(!store.delete(record.id + 10).unwrap());
        assert!(store.delete(record.id).unwrap());
        assert!(!store.delete(record.id).unwrap());
        assert_eq!(store.find(record.id).unwrap(), None);
    }
}
