//! Core domain types for the keepsake soft-delete data-access layer.
//!
//! This crate defines the model shared across crates:
//! - Entity definitions with per-type soft-delete column configuration
//! - Dynamic records and column values
//! - Read and delete operation options
//! - Deleted-timestamp formatting and the active-record sentinel
//! - Backing store configuration

pub mod config;
pub mod entity;
pub mod error;
pub mod options;
pub mod record;
pub mod timestamp;
pub mod value;

pub use config::StoreConfig;
pub use entity::{EntityDef, SoftDeleteFields};
pub use error::{Error, Result};
pub use options::{DeleteOptions, ReadOptions};
pub use record::Record;
pub use timestamp::{DELETED_AT_SENTINEL, format_timestamp, parse_timestamp};
pub use value::Value;

/// Default deleted-flag column name.
pub const DEFAULT_DELETED_FIELD: &str = "deleted";

/// Default deleted-timestamp column name.
pub const DEFAULT_DELETED_AT_FIELD: &str = "deleted_date";
