//! Invoice store persisted as a JSON file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use tracing::debug;

use super::{now, InvoiceStore, RecordTable, Result};
use crate::error::StoreError;
use crate::models::invoice::{InvoiceDraft, InvoiceRecord};

/// Invoice store reading and rewriting a JSON table on every operation.
///
/// A missing file is an empty table. Writes from one process are
/// serialized; concurrent processes are not coordinated.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<RecordTable> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(RecordTable::default()),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn persist(&self, table: &RecordTable) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_error(e))?;
        }

        let content = serde_json::to_string_pretty(table).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        debug!("Wrote {} invoices to {}", table.records.len(), self.path.display());
        Ok(())
    }

    /// Run `f` against the loaded table while holding the process lock.
    fn with_table<T>(&self, f: impl FnOnce(&mut RecordTable) -> (T, bool)) -> Result<T> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut table = self.load()?;
        let (value, dirty) = f(&mut table);
        if dirty {
            self.persist(&table)?;
        }
        Ok(value)
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl InvoiceStore for JsonFileStore {
    fn save(&self, draft: InvoiceDraft) -> Result<InvoiceRecord> {
        self.with_table(|table| (table.insert(draft, now()), true))
    }

    fn find(&self, id: i64) -> Result<Option<InvoiceRecord>> {
        self.with_table(|table| (table.find(id), false))
    }

    fn find_by_user(&self, user_id: i64) -> Result<Vec<InvoiceRecord>> {
        self.with_table(|table| (table.by_user(user_id), false))
    }

    fn find_by_date_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<InvoiceRecord>> {
        self.with_table(|table| (table.between(start, end), false))
    }

    fn find_all(&self) -> Result<Vec<InvoiceRecord>> {
        self.with_table(|table| (table.records.clone(), false))
    }

    fn delete(&self, id: i64) -> Result<bool> {
        self.with_table(|table| {
            let removed = table.remove(id);
            (removed, removed)
        })
    }
}
