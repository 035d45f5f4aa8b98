//! Listener, rule, and cascade test doubles.

use async_trait::async_trait;
use keepsake_core::Record;
use keepsake_store::{CascadeCoordinator, HookDecision, RecordListener, RuleSet, StoreResult};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Listener that counts every notification it receives.
#[derive(Default)]
pub struct CountingListener {
    pub before_delete: AtomicUsize,
    pub after_delete: AtomicUsize,
    pub before_save: AtomicUsize,
    pub after_save: AtomicUsize,
}

#[async_trait]
impl RecordListener for CountingListener {
    async fn before_delete(&self, _record: &Record) -> HookDecision {
        self.before_delete.fetch_add(1, Ordering::SeqCst);
        HookDecision::Continue
    }

    async fn after_delete(&self, _record: &Record) {
        self.after_delete.fetch_add(1, Ordering::SeqCst);
    }

    async fn before_save(&self, _record: &Record) -> HookDecision {
        self.before_save.fetch_add(1, Ordering::SeqCst);
        HookDecision::Continue
    }

    async fn after_save(&self, _record: &Record) {
        self.after_save.fetch_add(1, Ordering::SeqCst);
    }
}

impl CountingListener {
    pub fn delete_counts(&self) -> (usize, usize) {
        (
            self.before_delete.load(Ordering::SeqCst),
            self.after_delete.load(Ordering::SeqCst),
        )
    }

    #[allow(dead_code)]
    pub fn save_counts(&self) -> (usize, usize) {
        (
            self.before_save.load(Ordering::SeqCst),
            self.after_save.load(Ordering::SeqCst),
        )
    }
}

/// Listener that cancels every before-delete with a fixed result.
pub struct CancellingListener {
    pub result: bool,
}

#[async_trait]
impl RecordListener for CancellingListener {
    async fn before_delete(&self, _record: &Record) -> HookDecision {
        HookDecision::Cancel {
            result: self.result,
        }
    }
}

/// Rule set that rejects every delete.
#[allow(dead_code)]
pub struct RejectingRules;

#[async_trait]
impl RuleSet for RejectingRules {
    async fn check_delete(&self, _record: &Record) -> bool {
        false
    }
}

/// Cascade coordinator that records each invocation's record id and
/// primary flag.
#[derive(Default)]
pub struct RecordingCascade {
    pub calls: Mutex<Vec<(Option<i64>, bool)>>,
}

#[async_trait]
impl CascadeCoordinator for RecordingCascade {
    async fn cascade_delete(&self, record: &Record, primary: bool) -> StoreResult<()> {
        let id = record.get("id").and_then(|v| v.as_integer());
        self.calls.lock().expect("cascade mutex").push((id, primary));
        Ok(())
    }
}

impl RecordingCascade {
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("cascade mutex").len()
    }
}
