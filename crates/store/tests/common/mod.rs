//! Shared test utilities.

pub mod fixtures;
pub mod mocks;

use keepsake_store::{SqliteStore, StoreResult};
use std::sync::Arc;
use tempfile::TempDir;

/// A test store wrapper that cleans up on drop.
pub struct TestStore {
    store: Arc<SqliteStore>,
    _temp_dir: TempDir,
}

impl TestStore {
    /// Create a new test store backed by a SQLite file in a temp directory.
    pub async fn new() -> StoreResult<Self> {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let store = SqliteStore::new(&db_path, 5).await?;
        Ok(Self {
            store: Arc::new(store),
            _temp_dir: temp_dir,
        })
    }

    /// Get a reference to the store.
    pub fn store(&self) -> Arc<SqliteStore> {
        self.store.clone()
    }
}
