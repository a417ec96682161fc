//! Storage Module
//!
//! Persistence of the record collection as a unit.
//!
//! ## Responsibilities
//! - Load the whole collection into memory
//! - Overwrite the whole collection on every mutation
//! - No partial writes, no locking (callers serialize writers)
//!
//! ## File Format
//! ```text
//! [
//!   {
//!     "name": "Ana",
//!     "level": "admin",
//!     "id": "1"
//!   },
//!   ...
//! ]
//! ```
//! Pretty-printed JSON array, two-space indent, fields in construction order.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::Result;
use crate::record::Record;

/// Load/save access to a record collection
pub trait RecordStore: Send + Sync {
    /// Read and parse the entire collection
    fn load_all(&self) -> Result<Vec<Record>>;

    /// Serialize and replace the entire collection
    fn save_all(&self, records: &[Record]) -> Result<()>;
}

impl<S: RecordStore + ?Sized> RecordStore for Box<S> {
    fn load_all(&self) -> Result<Vec<Record>> {
        (**self).load_all()
    }

    fn save_all(&self, records: &[Record]) -> Result<()> {
        (**self).save_all(records)
    }
}

impl<S: RecordStore + ?Sized> RecordStore for std::sync::Arc<S> {
    fn load_all(&self) -> Result<Vec<Record>> {
        (**self).load_all()
    }

    fn save_all(&self, records: &[Record]) -> Result<()> {
        (**self).save_all(records)
    }
}
