//! Record Module
//!
//! A single "cadastro": a schema-less JSON object whose only structural
//! requirement is a string `id`. Field order is kept exactly as the record
//! was constructed so the persisted file stays diffable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field names with meaning to the service
pub const ID_FIELD: &str = "id";
pub const NAME_FIELD: &str = "name";
pub const LEVEL_FIELD: &str = "level";

/// Ordered field map of a record
pub type Fields = Map<String, Value>;

/// One registration entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: Fields,
}

impl Record {
    /// Build a new record from request fields, then assign its id.
    ///
    /// Any `id` in `fields` is overwritten; if present it keeps its position.
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        let mut record = Self { fields };
        record.set_id(id);
        record
    }

    /// Wrap an existing field map without touching the id
    pub fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// The record id, if present and a string
    pub fn id(&self) -> Option<&str> {
        self.str_field(ID_FIELD)
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field(NAME_FIELD)
    }

    pub fn level(&self) -> Option<&str> {
        self.str_field(LEVEL_FIELD)
    }

    /// Exact, case-sensitive id comparison
    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// Look up any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Shallow-merge `patch` over this record. Patch fields win, except
    /// `id`, which is re-asserted afterwards.
    pub fn merge(&mut self, patch: Fields) {
        let id = self.get(ID_FIELD).cloned();
        for (key, value) in patch {
            self.fields.insert(key, value);
        }
        if let Some(id) = id {
            self.fields.insert(ID_FIELD.to_string(), id);
        }
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.fields
            .insert(ID_FIELD.to_string(), Value::String(id.into()));
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.fields)
    }
}
