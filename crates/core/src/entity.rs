//! Entity definitions and per-type soft-delete column configuration.

use crate::error::{Error, Result};
use crate::{DEFAULT_DELETED_AT_FIELD, DEFAULT_DELETED_FIELD};
use serde::{Deserialize, Serialize};

/// Per-type soft-delete column names.
///
/// Both columns must exist on the entity's declared schema; the store's field
/// resolver validates them on first use and treats a missing column as a
/// configuration error.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SoftDeleteFields {
    /// Name of the deleted-flag column (stored as 0/1).
    #[serde(default = "default_deleted_field")]
    pub deleted_field: String,
    /// Name of the deleted-timestamp column (stored as formatted text,
    /// sentinel "0" while the record is active).
    #[serde(default = "default_deleted_at_field")]
    pub deleted_at_field: String,
}

fn default_deleted_field() -> String {
    DEFAULT_DELETED_FIELD.to_string()
}

fn default_deleted_at_field() -> String {
    DEFAULT_DELETED_AT_FIELD.to_string()
}

impl Default for SoftDeleteFields {
    fn default() -> Self {
        Self {
            deleted_field: default_deleted_field(),
            deleted_at_field: default_deleted_at_field(),
        }
    }
}

/// Definition of a soft-deletable entity: table name, primary key, declared
/// schema columns, and soft-delete column configuration.
///
/// The declared column list is the schema contract consumed by the field
/// resolver; a column absent from it does not exist as far as this layer is
/// concerned.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EntityDef {
    table: String,
    primary_key: Vec<String>,
    columns: Vec<String>,
    #[serde(default)]
    soft_delete: SoftDeleteFields,
}

impl EntityDef {
    /// Create an entity definition with default soft-delete columns.
    pub fn new<P, C>(table: impl Into<String>, primary_key: P, columns: C) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let table = table.into();
        let primary_key: Vec<String> = primary_key.into_iter().map(Into::into).collect();
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        if table.is_empty() {
            return Err(Error::InvalidEntity("table name is empty".to_string()));
        }
        if primary_key.is_empty() {
            return Err(Error::InvalidEntity(format!(
                "entity {table} has no primary key columns"
            )));
        }
        for key in &primary_key {
            if !columns.contains(key) {
                return Err(Error::InvalidEntity(format!(
                    "primary key column {key} is not a declared column of {table}"
                )));
            }
        }

        Ok(Self {
            table,
            primary_key,
            columns,
            soft_delete: SoftDeleteFields::default(),
        })
    }

    /// Override the soft-delete column names for this entity.
    pub fn with_soft_delete_fields(mut self, fields: SoftDeleteFields) -> Self {
        self.soft_delete = fields;
        self
    }

    /// Table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Primary key column names.
    pub fn primary_key(&self) -> &[String] {
        &self.primary_key
    }

    /// Declared schema columns.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Check whether a column is declared on this entity's schema.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Configured soft-delete column names.
    pub fn soft_delete(&self) -> &SoftDeleteFields {
        &self.soft_delete
    }
}
