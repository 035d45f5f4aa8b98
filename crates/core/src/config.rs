//! Store configuration shared across crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Backing store configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    /// SQLite-backed store.
    Sqlite {
        /// Database file path (`:memory:` for an in-memory database).
        path: PathBuf,
        /// Busy timeout in seconds applied to concurrent access.
        #[serde(default = "default_busy_timeout_secs")]
        busy_timeout_secs: u64,
    },
}

fn default_busy_timeout_secs() -> u64 {
    5
}
