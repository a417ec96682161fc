//! Filter Engine
//!
//! Selects the subset of a collection matching optional id/name/level
//! criteria.
//!
//! ## Policy
//! - `id` given: exact, case-sensitive match; `name` and `level` ignored
//! - otherwise `name` is a case-insensitive substring match and `level` a
//!   case-insensitive exact match, combined with AND
//! - no criteria: the collection is returned unchanged
//!
//! Empty criteria count as absent.

use serde::Deserialize;

use crate::record::Record;

/// Query criteria for the collection endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub level: Option<String>,
}

impl Filter {
    /// A filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        criterion(&self.id).is_none()
            && criterion(&self.name).is_none()
            && criterion(&self.level).is_none()
    }

    /// Whether a single record satisfies the filter
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(id) = criterion(&self.id) {
            return record.has_id(id);
        }

        if let Some(name) = criterion(&self.name) {
            let needle = name.to_lowercase();
            match record.name() {
                Some(value) if value.to_lowercase().contains(&needle) => {}
                _ => return false,
            }
        }

        if let Some(level) = criterion(&self.level) {
            match record.level() {
                Some(value) if value.to_lowercase() == level.to_lowercase() => {}
                _ => return false,
            }
        }

        true
    }

    /// Keep the matching records, preserving collection order
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn criterion(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
