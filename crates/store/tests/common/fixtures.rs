//! Entity fixtures and schema setup for integration tests.

use keepsake_core::{EntityDef, Record, SoftDeleteFields};
use keepsake_store::SqliteStore;

/// People entity with the default soft-delete columns.
pub fn people_entity() -> EntityDef {
    EntityDef::new(
        "people",
        ["id"],
        ["id", "name", "status", "deleted", "deleted_date"],
    )
    .expect("valid entity")
}

pub async fn create_people_table(store: &SqliteStore) {
    sqlx::query(
        "CREATE TABLE people (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'active',
            deleted INTEGER NOT NULL DEFAULT 0,
            deleted_date TEXT NOT NULL DEFAULT '0'
        )",
    )
    .execute(store.pool())
    .await
    .expect("create people table failed");
}

/// A never-persisted person record with active soft-delete state.
pub fn person(id: i64, name: &str, status: &str) -> Record {
    Record::new()
        .with("id", id)
        .with("name", name)
        .with("status", status)
        .with("deleted", 0)
        .with("deleted_date", "0")
}

/// Notes entity using renamed soft-delete columns.
#[allow(dead_code)]
pub fn notes_entity() -> EntityDef {
    EntityDef::new("notes", ["id"], ["id", "body", "removed", "removed_on"])
        .expect("valid entity")
        .with_soft_delete_fields(SoftDeleteFields {
            deleted_field: "removed".to_string(),
            deleted_at_field: "removed_on".to_string(),
        })
}

#[allow(dead_code)]
pub async fn create_notes_table(store: &SqliteStore) {
    sqlx::query(
        "CREATE TABLE notes (
            id INTEGER PRIMARY KEY,
            body TEXT NOT NULL,
            removed INTEGER NOT NULL DEFAULT 0,
            removed_on TEXT NOT NULL DEFAULT '0'
        )",
    )
    .execute(store.pool())
    .await
    .expect("create notes table failed");
}

/// Entity whose schema lacks the configured deleted-flag column.
#[allow(dead_code)]
pub fn ghosts_entity() -> EntityDef {
    EntityDef::new("ghosts", ["id"], ["id", "name"]).expect("valid entity")
}

#[allow(dead_code)]
pub async fn create_ghosts_table(store: &SqliteStore) {
    sqlx::query("CREATE TABLE ghosts (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
        .execute(store.pool())
        .await
        .expect("create ghosts table failed");
}
