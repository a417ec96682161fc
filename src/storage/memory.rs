//! In-memory record store
//!
//! Test double for the file store. Holds the collection behind a lock and
//! can be switched into failure modes to exercise error paths.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;

use crate::error::{CadastroError, Result};
use crate::record::Record;

use super::RecordStore;

/// Record store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `records`
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    /// Snapshot of the current contents
    pub fn records(&self) -> Vec<Record> {
        self.records.read().clone()
    }

    /// Make every subsequent `load_all` fail
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save_all` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Record>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CadastroError::StorageRead {
                path: "<memory>".into(),
                reason: "simulated read failure".to_string(),
            });
        }
        Ok(self.records.read().clone())
    }

    fn save_all(&self, records: &[Record]) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CadastroError::StorageWrite {
                path: "<memory>".into(),
                reason: "simulated write failure".to_string(),
            });
        }
        *self.records.write() = records.to_vec();
        Ok(())
    }
}
