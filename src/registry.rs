//! Registry Module
//!
//! The CRUD core that coordinates the record store, the filter engine and
//! id generation.
//!
//! ## Responsibilities
//! - Load the collection fresh for every operation
//! - Apply filters for reads
//! - Mutate and save the whole collection for writes
//! - Generate ids for new records

use parking_lot::Mutex;

use crate::config::{Config, IdStrategy};
use crate::error::{CadastroError, Result};
use crate::filter::Filter;
use crate::record::{Fields, Record};
use crate::storage::{JsonFileStore, RecordStore};

/// Record registry
///
/// ## Concurrency Model
///
/// - **Writes** (create/update/delete): serialized by `write_lock`, so each
///   load → mutate → save runs as one critical section and no update is lost
/// - **Reads** (get/list): lock-free; the store replaces the file atomically
///
/// Nothing is cached between calls: the store is the only source of truth.
pub struct Registry {
    /// Backing store (whole-collection load/save)
    store: Box<dyn RecordStore>,

    /// How `create` assigns ids
    id_strategy: IdStrategy,

    /// Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl Registry {
    /// Create a registry over any store
    pub fn new(store: impl RecordStore + 'static, id_strategy: IdStrategy) -> Self {
        Self {
            store: Box::new(store),
            id_strategy,
            write_lock: Mutex::new(()),
        }
    }

    /// Open a registry backed by the JSON file named in `config`
    pub fn open(config: &Config) -> Result<Self> {
        let store = JsonFileStore::open(&config.data_file, config.create_if_missing)?;
        tracing::info!(
            path = %store.path().display(),
            id_strategy = %config.id_strategy,
            "registry opened"
        );
        Ok(Self::new(store, config.id_strategy))
    }

    /// Fetch one record by exact id
    pub fn get(&self, id: &str) -> Result<Record> {
        self.store
            .load_all()?
            .into_iter()
            .find(|r| r.has_id(id))
            .ok_or_else(|| CadastroError::NotFound(id.to_string()))
    }

    /// Fetch every record matching `filter`, in collection order
    ///
    /// An empty result is an error (`EmptyResultSet`), not an empty list.
    pub fn list(&self, filter: &Filter) -> Result<Vec<Record>> {
        let matches = filter.apply(self.store.load_all()?);
        if matches.is_empty() {
            return Err(CadastroError::EmptyResultSet);
        }
        Ok(matches)
    }

    /// Append a new record built from `fields` plus a generated id
    pub fn create(&self, fields: Fields) -> Result<Record> {
        let _write_guard = self.write_lock.lock();

        let mut records = self.store.load_all()?;
        let id = self.next_id(&records);
        let record = Record::new(id, fields);

        records.push(record.clone());
        self.store.save_all(&records)?;

        tracing::debug!(id = record.id().unwrap_or_default(), "record created");
        Ok(record)
    }

    /// Shallow-merge `fields` into the record with `id`
    ///
    /// The stored id never changes, even if `fields` carries one.
    pub fn update(&self, id: &str, fields: Fields) -> Result<Record> {
        let _write_guard = self.write_lock.lock();

        let mut records = self.store.load_all()?;
        let record = records
            .iter_mut()
            .find(|r| r.has_id(id))
            .ok_or_else(|| CadastroError::NotFound(id.to_string()))?;

        record.merge(fields);
        let updated = record.clone();
        self.store.save_all(&records)?;

        tracing::debug!(id, "record updated");
        Ok(updated)
    }

    /// Remove the first record with `id`, keeping the others in order
    pub fn delete(&self, id: &str) -> Result<()> {
        let _write_guard = self.write_lock.lock();

        let mut records = self.store.load_all()?;
        let index = records
            .iter()
            .position(|r| r.has_id(id))
            .ok_or_else(|| CadastroError::NotFound(id.to_string()))?;

        records.remove(index);
        self.store.save_all(&records)?;

        tracing::debug!(id, "record deleted");
        Ok(())
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        Ok(self.store.load_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Get the id strategy
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    fn next_id(&self, records: &[Record]) -> String {
        match self.id_strategy {
            IdStrategy::Sequential => (records.len() + 1).to_string(),
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
        }
    }
}
