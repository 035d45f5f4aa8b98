//! Soft-delete column resolution against the entity schema.

use crate::error::{StoreError, StoreResult};
use keepsake_core::EntityDef;

/// Resolved, schema-validated soft-delete column names for one entity.
///
/// Resolution is pure and side-effect free; the record-access component
/// performs it lazily on first use and caches the result for the lifetime of
/// the component. A missing column is a configuration error and must be
/// treated as fatal, not retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFields {
    deleted_field: String,
    deleted_at_field: String,
}

impl ResolvedFields {
    /// Resolve the configured deleted-flag and deleted-timestamp columns,
    /// validating both against the entity's declared schema.
    pub fn resolve(entity: &EntityDef) -> StoreResult<Self> {
        let config = entity.soft_delete();
        for field in [&config.deleted_field, &config.deleted_at_field] {
            if !entity.has_column(field) {
                return Err(StoreError::MissingColumn {
                    entity: entity.table().to_string(),
                    field: field.clone(),
                });
            }
        }
        Ok(Self {
            deleted_field: config.deleted_field.clone(),
            deleted_at_field: config.deleted_at_field.clone(),
        })
    }

    /// Name of the deleted-flag column.
    pub fn deleted_field(&self) -> &str {
        &self.deleted_field
    }

    /// Name of the deleted-timestamp column.
    pub fn deleted_at_field(&self) -> &str {
        &self.deleted_at_field
    }
}
