//! JSON file store
//!
//! The whole collection lives in one pretty-printed JSON array.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{CadastroError, Result};
use crate::record::Record;

use super::RecordStore;

/// File-backed record store
///
/// Saves go to a sibling `.tmp` file that is then renamed over the target,
/// so readers never observe a half-written collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// With `create_if_missing`, parent directories are created and the file
    /// is seeded with an empty array. Otherwise a missing file is left alone
    /// and surfaces later as a read error.
    pub fn open(path: impl Into<PathBuf>, create_if_missing: bool) -> Result<Self> {
        let store = Self { path: path.into() };

        if create_if_missing && !store.path.exists() {
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| store.write_error(e))?;
                }
            }
            store.save_all(&[])?;
            tracing::info!(path = %store.path.display(), "created empty record file");
        }

        Ok(store)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn read_error(&self, reason: impl ToString) -> CadastroError {
        CadastroError::StorageRead {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }

    fn write_error(&self, reason: impl ToString) -> CadastroError {
        CadastroError::StorageWrite {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl RecordStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Record>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;
        let records: Vec<Record> =
            serde_json::from_str(&contents).map_err(|e| self.read_error(e))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn save_all(&self, records: &[Record]) -> Result<()> {
        let mut buf = serde_json::to_vec_pretty(records).map_err(|e| self.write_error(e))?;
        buf.push(b'\n');

        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp).map_err(|e| self.write_error(e))?;
            file.write_all(&buf).map_err(|e| self.write_error(e))?;
            file.sync_all().map_err(|e| self.write_error(e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| self.write_error(e))?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }
}
