//! SQLite store and the persistence primitives it exposes.

use crate::error::{StoreError, StoreResult};
use crate::query::{Condition, Query, QueryKind, render_conditions};
use keepsake_core::{Record, Value};
use sqlx::query::Query as SqlxQuery;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Column, Pool, Row, Sqlite, TypeInfo, ValueRef};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// SQLite-backed store exposing the persistence primitives the soft-delete
/// layer consumes: insert, conditioned update/delete with affected-row
/// counts, and row fetching for select queries.
pub struct SqliteStore {
    pool: Pool<Sqlite>,
}

impl SqliteStore {
    /// Create a new SQLite store.
    pub async fn new(path: impl AsRef<Path>, busy_timeout_secs: u64) -> StoreResult<Self> {
        let path = path.as_ref();

        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Config(format!("create {}: {e}", parent.display())))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}?mode=rwc", path.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
            .foreign_keys(true)
            // Prevent transient "database is locked" errors under concurrent access.
            .busy_timeout(Duration::from_secs(busy_timeout_secs));

        let pool = SqlitePoolOptions::new()
            // SQLite permits limited write concurrency; a single connection
            // avoids persistent "database is locked" failures.
            .max_connections(1)
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Insert one row.
    pub async fn insert(&self, table: &str, values: &[(String, Value)]) -> StoreResult<()> {
        if values.is_empty() {
            return Err(StoreError::InvalidArgument(
                "insert requires at least one value".to_string(),
            ));
        }
        let columns: Vec<&str> = values.iter().map(|(c, _)| c.as_str()).collect();
        let placeholders = vec!["?"; values.len()].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table,
            columns.join(", "),
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for (_, value) in values {
            query = bind_value(query, value);
        }
        query.execute(&self.pool).await?;
        Ok(())
    }

    /// Execute an update against the rows matching `conditions`, returning
    /// the number of affected rows.
    pub async fn update(
        &self,
        table: &str,
        set: &[(String, Value)],
        conditions: &[Condition],
    ) -> StoreResult<u64> {
        if set.is_empty() {
            return Err(StoreError::InvalidArgument(
                "update requires at least one assignment".to_string(),
            ));
        }
        let assignments: Vec<String> = set.iter().map(|(c, _)| format!("{c} = ?")).collect();
        let mut sql = format!("UPDATE {} SET {}", table, assignments.join(", "));
        let (clause, params) = render_conditions(conditions);
        if !clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }

        let mut query = sqlx::query(&sql);
        for (_, value) in set {
            query = bind_value(query, value);
        }
        for value in &params {
            query = bind_value(query, value);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Physically delete the rows matching `conditions`, returning the number
    /// of removed rows.
    pub async fn delete(&self, table: &str, conditions: &[Condition]) -> StoreResult<u64> {
        let mut sql = format!("DELETE FROM {table}");
        let (clause, params) = render_conditions(conditions);
        if !clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clause);
        }

        let mut query = sqlx::query(&sql);
        for value in &params {
            query = bind_value(query, value);
        }
        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Fetch the records matched by a select query.
    pub async fn fetch(&self, query: &Query) -> StoreResult<Vec<Record>> {
        if query.kind() != QueryKind::Select {
            return Err(StoreError::InvalidArgument(
                "fetch requires a select query".to_string(),
            ));
        }
        let (sql, params) = query.to_sql();
        let mut q = sqlx::query(&sql);
        for value in &params {
            q = bind_value(q, value);
        }
        let rows = q.fetch_all(&self.pool).await?;
        rows.iter().map(record_from_row).collect()
    }
}

fn bind_value<'q>(
    query: SqlxQuery<'q, Sqlite, SqliteArguments<'q>>,
    value: &'q Value,
) -> SqlxQuery<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        Value::Null => query.bind(Option::<i64>::None),
        Value::Integer(v) => query.bind(*v),
        Value::Real(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.as_str()),
        Value::Blob(v) => query.bind(v.as_slice()),
    }
}

/// Decode a row into a dynamic record using the runtime type of each column
/// value.
fn record_from_row(row: &SqliteRow) -> StoreResult<Record> {
    let mut record = Record::new();
    for (idx, column) in row.columns().iter().enumerate() {
        let raw = row.try_get_raw(idx)?;
        let value = if raw.is_null() {
            Value::Null
        } else {
            match raw.type_info().name() {
                "INTEGER" | "BOOLEAN" => Value::Integer(row.try_get::<i64, _>(idx)?),
                "REAL" => Value::Real(row.try_get::<f64, _>(idx)?),
                "BLOB" => Value::Blob(row.try_get::<Vec<u8>, _>(idx)?),
                _ => Value::Text(row.try_get::<String, _>(idx)?),
            }
        };
        record.set(column.name(), value);
    }
    record.mark_persisted();
    Ok(record)
}
