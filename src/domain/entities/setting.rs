//! Setting entity - A unique key paired with a mutable string value

use chrono::{DateTime, Utc};

use crate::domain::value_objects::SettingId;

/// A single configurable parameter
///
/// `key` is unique within its category and never changes once the record
/// exists. Only `value` is mutated, and only through a key-scoped update.
/// `id` and `updated_at` are assigned by the store, so records built from
/// inbound requests usually carry neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub id: Option<SettingId>,
    pub key: String,
    pub value: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Setting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: None,
            key: key.into(),
            value: value.into(),
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: SettingId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = Some(updated_at);
        self
    }

    /// Whether this record has been persisted
    #[cfg(test)]
    pub fn is_stored(&self) -> bool {
        self.id.is_some()
    }
}
