//! Application rule checks consulted before mutations.

use async_trait::async_trait;
use keepsake_core::Record;

/// Rule set consulted before delete and save operations.
///
/// A failed check rejects the operation without mutating anything; rejection
/// is a normal outcome reported as `false`, not an error.
#[async_trait]
pub trait RuleSet: Send + Sync {
    /// Check whether the record may be soft-deleted.
    async fn check_delete(&self, _record: &Record) -> bool {
        true
    }

    /// Check whether the record may be saved.
    async fn check_save(&self, _record: &Record) -> bool {
        true
    }
}
