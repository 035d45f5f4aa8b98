//! Cascading-delete contract.

use crate::error::StoreResult;
use async_trait::async_trait;
use keepsake_core::Record;

/// Association-traversal collaborator that propagates a delete to records
/// dependent on the one being deleted.
///
/// This layer only invokes the contract; traversal itself belongs to the host
/// application. Single-record deletes always pass `primary = false`: the
/// coordinator handles dependent cleanup only, while cleanup duties for the
/// main record's own associations remain with the delete operation.
#[async_trait]
pub trait CascadeCoordinator: Send + Sync {
    /// Cascade a delete to records dependent on `record`.
    async fn cascade_delete(&self, record: &Record, primary: bool) -> StoreResult<()>;
}
