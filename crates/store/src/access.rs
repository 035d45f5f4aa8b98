//! Soft-delete record access: filtered reads and the delete, restore, and
//! purge operations.

use crate::cascade::CascadeCoordinator;
use crate::error::{StoreError, StoreResult};
use crate::fields::ResolvedFields;
use crate::filter;
use crate::hooks::{ListenerSet, RecordListener};
use crate::query::{CompareOp, Condition, Query};
use crate::rules::RuleSet;
use crate::store::SqliteStore;
use async_trait::async_trait;
use keepsake_core::{
    DELETED_AT_SENTINEL, DeleteOptions, EntityDef, ReadOptions, Record, Value, format_timestamp,
};
use std::sync::{Arc, OnceLock};
use time::OffsetDateTime;

/// Soft-delete capability exposed to application code.
///
/// Reads transparently exclude records marked deleted unless the request
/// opts out; deletes mark instead of removing; purge is the only physical
/// removal path. Success for single-record operations is determined from the
/// number of rows actually affected, so a concurrent mutation of the same
/// record resolves to one caller seeing `false` rather than to a conflict
/// error.
#[async_trait]
pub trait SoftDeletable: Send + Sync {
    /// Run a read query with soft-delete filtering applied.
    async fn find(&self, query: Query) -> StoreResult<Vec<Record>>;

    /// Look up one record by its primary-key values, honoring `options`.
    async fn get(&self, key: &[Value], options: ReadOptions) -> StoreResult<Option<Record>>;

    /// Soft-delete one record: mark it deleted and stamp the deletion time.
    ///
    /// Returns `true` iff the update affected at least one row. Rule
    /// rejection, listener cancellation, and a vanished record all report
    /// `false`.
    async fn delete(&self, record: &Record, options: DeleteOptions) -> StoreResult<bool>;

    /// Soft-delete every record matching `conditions` with a single update,
    /// returning the affected-row count.
    ///
    /// Skips rule checks, delete notifications, and cascading; callers that
    /// need those semantics must delete records individually.
    async fn delete_all(&self, conditions: Vec<Condition>) -> StoreResult<u64>;

    /// Revert a record's deleted flag and timestamp, persisting it through
    /// the normal save path. Returns what the save path returns.
    async fn restore(&self, record: &mut Record) -> StoreResult<bool>;

    /// Physically remove one record after a full soft delete (cascade and
    /// notifications run). Returns `true` iff a row was physically removed.
    async fn hard_delete(&self, record: &Record) -> StoreResult<bool>;

    /// Physically remove every record deleted at or before `cutoff`. No
    /// notifications, rule checks, or cascading.
    async fn hard_delete_all(&self, cutoff: OffsetDateTime) -> StoreResult<u64>;
}

/// Record-access component for one soft-deletable entity, composed by
/// delegation: the underlying store executes, this component decides.
pub struct RecordAccess {
    store: Arc<SqliteStore>,
    entity: EntityDef,
    fields: OnceLock<ResolvedFields>,
    listeners: ListenerSet,
    rules: Option<Arc<dyn RuleSet>>,
    cascade: Option<Arc<dyn CascadeCoordinator>>,
}

impl RecordAccess {
    /// Create a record-access component for `entity`.
    pub fn new(store: Arc<SqliteStore>, entity: EntityDef) -> Self {
        Self {
            store,
            entity,
            fields: OnceLock::new(),
            listeners: ListenerSet::new(),
            rules: None,
            cascade: None,
        }
    }

    /// Register a lifecycle listener.
    pub fn with_listener(mut self, listener: Arc<dyn RecordListener>) -> Self {
        self.listeners.register(listener);
        self
    }

    /// Attach a rule set consulted before deletes and saves.
    pub fn with_rules(mut self, rules: Arc<dyn RuleSet>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Attach the cascade coordinator for dependent records.
    pub fn with_cascade(mut self, cascade: Arc<dyn CascadeCoordinator>) -> Self {
        self.cascade = Some(cascade);
        self
    }

    /// The entity this component serves.
    pub fn entity(&self) -> &EntityDef {
        &self.entity
    }

    /// Resolved soft-delete columns, validated against the schema on first
    /// use and cached for the lifetime of the component.
    fn fields(&self) -> StoreResult<&ResolvedFields> {
        if let Some(fields) = self.fields.get() {
            return Ok(fields);
        }
        let resolved = ResolvedFields::resolve(&self.entity)?;
        Ok(self.fields.get_or_init(|| resolved))
    }

    fn identity_conditions(&self, record: &Record) -> StoreResult<Vec<Condition>> {
        let identity = record.identity(&self.entity).ok_or_else(|| {
            StoreError::InvalidArgument("all primary key values required".to_string())
        })?;
        Ok(identity
            .into_iter()
            .map(|(column, value)| Condition::new(column, CompareOp::Eq, value))
            .collect())
    }

    fn save_values(&self, record: &Record) -> Vec<(String, Value)> {
        record
            .columns()
            .filter(|(column, _)| !self.entity.primary_key().iter().any(|k| k.as_str() == *column))
            .filter(|(column, _)| self.entity.has_column(column))
            .map(|(column, value)| (column.to_string(), value.clone()))
            .collect()
    }

    /// Persist a record through the normal save path: save rules, a
    /// cancellable before-save notification, then an update of the record's
    /// values by identity (or an insert for a never-persisted record).
    pub async fn save(&self, record: &mut Record) -> StoreResult<bool> {
        if let Some(rules) = &self.rules
            && !rules.check_save(record).await
        {
            return Ok(false);
        }

        let outcome = self.listeners.before_save(record).await;
        if outcome.cancelled {
            return Ok(outcome.result.unwrap_or(false));
        }

        let saved = if record.is_persisted() {
            let conditions = self.identity_conditions(record)?;
            let set = self.save_values(record);
            if set.is_empty() {
                return Ok(false);
            }
            self.store.update(self.entity.table(), &set, &conditions).await? > 0
        } else {
            let values: Vec<(String, Value)> = record
                .columns()
                .map(|(column, value)| (column.to_string(), value.clone()))
                .collect();
            self.store.insert(self.entity.table(), &values).await?;
            record.mark_persisted();
            true
        };

        if saved {
            self.listeners.after_save(record).await;
        }
        Ok(saved)
    }
}

#[async_trait]
impl SoftDeletable for RecordAccess {
    async fn find(&self, mut query: Query) -> StoreResult<Vec<Record>> {
        let fields = self.fields()?;
        filter::apply(&mut query, fields);
        self.store.fetch(&query).await
    }

    async fn get(&self, key: &[Value], options: ReadOptions) -> StoreResult<Option<Record>> {
        if key.len() != self.entity.primary_key().len() {
            return Err(StoreError::InvalidArgument(
                "all primary key values required".to_string(),
            ));
        }
        let mut query = Query::select(&self.entity).with_options(options);
        for (column, value) in self.entity.primary_key().iter().zip(key) {
            query = query.and_where(Condition::eq(column.clone(), value.clone()));
        }
        Ok(self.find(query).await?.into_iter().next())
    }

    async fn delete(&self, record: &Record, options: DeleteOptions) -> StoreResult<bool> {
        // A record that was never persisted has nothing to delete; no
        // notifications fire.
        if !record.is_persisted() {
            return Ok(false);
        }

        let fields = self.fields()?;
        let conditions = self.identity_conditions(record)?;

        if options.check_rules
            && let Some(rules) = &self.rules
            && !rules.check_delete(record).await
        {
            return Ok(false);
        }

        let outcome = self.listeners.before_delete(record).await;
        if outcome.cancelled {
            return Ok(outcome.result.unwrap_or(false));
        }

        if let Some(cascade) = &self.cascade {
            // Dependent cleanup only; the main record keeps its own
            // association duties.
            cascade.cascade_delete(record, false).await?;
        }

        let set = deleted_assignments(fields)?;
        let affected = self
            .store
            .update(self.entity.table(), &set, &conditions)
            .await?;
        tracing::debug!(entity = self.entity.table(), affected, "soft delete");

        let deleted = affected > 0;
        if deleted {
            self.listeners.after_delete(record).await;
        }
        Ok(deleted)
    }

    async fn delete_all(&self, conditions: Vec<Condition>) -> StoreResult<u64> {
        let fields = self.fields()?;
        let set = deleted_assignments(fields)?;
        let affected = self
            .store
            .update(self.entity.table(), &set, &conditions)
            .await?;
        tracing::debug!(entity = self.entity.table(), affected, "bulk soft delete");
        Ok(affected)
    }

    async fn restore(&self, record: &mut Record) -> StoreResult<bool> {
        let fields = self.fields()?;
        record.set(fields.deleted_field(), 0);
        record.set(fields.deleted_at_field(), DELETED_AT_SENTINEL);
        self.save(record).await
    }

    async fn hard_delete(&self, record: &Record) -> StoreResult<bool> {
        if !self.delete(record, DeleteOptions::default()).await? {
            return Ok(false);
        }
        let conditions = self.identity_conditions(record)?;
        let affected = self.store.delete(self.entity.table(), &conditions).await?;
        tracing::debug!(entity = self.entity.table(), affected, "hard delete");
        Ok(affected > 0)
    }

    async fn hard_delete_all(&self, cutoff: OffsetDateTime) -> StoreResult<u64> {
        let fields = self.fields()?;
        let cutoff = format_timestamp(cutoff)?;
        let conditions = vec![
            Condition::new(fields.deleted_field(), CompareOp::Ne, 0),
            Condition::new(fields.deleted_at_field(), CompareOp::Le, cutoff),
        ];
        let affected = self.store.delete(self.entity.table(), &conditions).await?;
        tracing::debug!(entity = self.entity.table(), affected, "purge");
        Ok(affected)
    }
}

fn deleted_assignments(fields: &ResolvedFields) -> StoreResult<Vec<(String, Value)>> {
    let now = format_timestamp(OffsetDateTime::now_utc())?;
    Ok(vec![
        (fields.deleted_field().to_string(), Value::Integer(1)),
        (fields.deleted_at_field().to_string(), Value::Text(now)),
    ])
}
