//! Soft-delete data-access layer for Keepsake.
//!
//! This crate provides the record-access plane:
//! - Read-query representation with transparent soft-delete filtering
//! - Soft delete, bulk delete, restore, and purge operations
//! - Listener, rule-check, and cascade contracts consumed at the
//!   operation extension points
//! - A SQLite store exposing the persistence primitives

pub mod access;
pub mod cascade;
pub mod error;
pub mod fields;
pub mod filter;
pub mod hooks;
pub mod query;
pub mod rules;
pub mod store;

pub use access::{RecordAccess, SoftDeletable};
pub use cascade::CascadeCoordinator;
pub use error::{StoreError, StoreResult};
pub use fields::ResolvedFields;
pub use hooks::{HookDecision, HookOutcome, ListenerSet, RecordListener};
pub use query::{CompareOp, Condition, Join, Query, QueryKind};
pub use rules::RuleSet;
pub use store::SqliteStore;

use keepsake_core::StoreConfig;
use std::sync::Arc;

/// Create a store from configuration.
pub async fn from_config(config: &StoreConfig) -> StoreResult<Arc<SqliteStore>> {
    match config {
        StoreConfig::Sqlite {
            path,
            busy_timeout_secs,
        } => {
            let store = SqliteStore::new(path, *busy_timeout_secs).await?;
            Ok(Arc::new(store))
        }
    }
}
