//! Dynamic record representation.

use crate::entity::EntityDef;
use crate::value::Value;
use std::collections::BTreeMap;

/// An addressable row of a given entity, identified by its primary-key
/// values.
///
/// Records built by hand are not persisted until they have been written to or
/// read from the store; a soft delete of a never-persisted record is rejected
/// without side effects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    values: BTreeMap<String, Value>,
    persisted: bool,
}

impl Record {
    /// Create an empty, never-persisted record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any previous value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Get a column value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Iterate over the record's columns and values.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether this record has been persisted (written to or read from the
    /// store).
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    /// Mark the record as persisted.
    pub fn mark_persisted(&mut self) {
        self.persisted = true;
    }

    /// The record's complete primary-key value set per the entity definition,
    /// or `None` if any key value is missing or NULL.
    pub fn identity(&self, entity: &EntityDef) -> Option<Vec<(String, Value)>> {
        let mut identity = Vec::with_capacity(entity.primary_key().len());
        for key in entity.primary_key() {
            match self.values.get(key) {
                Some(value) if !value.is_null() => {
                    identity.push((key.clone(), value.clone()));
                }
                _ => return None,
            }
        }
        Some(identity)
    }
}
