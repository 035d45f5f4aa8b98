//! Listener registration and notification dispatch for record operations.

use async_trait::async_trait;
use keepsake_core::Record;
use std::sync::Arc;

/// Decision returned by a cancellable notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookDecision {
    /// Proceed with the operation.
    Continue,
    /// Cancel the operation. The listener supplies the result the operation
    /// reports to its caller.
    Cancel { result: bool },
}

/// Structured outcome of dispatching a cancellable notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookOutcome {
    pub cancelled: bool,
    pub result: Option<bool>,
}

/// Listener for record lifecycle notifications. Every method defaults to a
/// no-op, so implementations only override the events they care about.
#[async_trait]
pub trait RecordListener: Send + Sync {
    /// Consulted before a single-record soft delete; may cancel it.
    async fn before_delete(&self, _record: &Record) -> HookDecision {
        HookDecision::Continue
    }

    /// Fired after a successful single-record soft delete. The outcome does
    /// not affect the operation result.
    async fn after_delete(&self, _record: &Record) {}

    /// Consulted before a save; may cancel it.
    async fn before_save(&self, _record: &Record) -> HookDecision {
        HookDecision::Continue
    }

    /// Fired after a successful save.
    async fn after_save(&self, _record: &Record) {}
}

/// Ordered set of registered listeners.
#[derive(Clone, Default)]
pub struct ListenerSet {
    listeners: Vec<Arc<dyn RecordListener>>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are consulted in registration order.
    pub fn register(&mut self, listener: Arc<dyn RecordListener>) {
        self.listeners.push(listener);
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Dispatch the cancellable before-delete notification. The first
    /// listener that cancels wins; later listeners are not consulted.
    pub async fn before_delete(&self, record: &Record) -> HookOutcome {
        for listener in &self.listeners {
            if let HookDecision::Cancel { result } = listener.before_delete(record).await {
                return HookOutcome {
                    cancelled: true,
                    result: Some(result),
                };
            }
        }
        HookOutcome {
            cancelled: false,
            result: None,
        }
    }

    /// Dispatch the after-delete notification to every listener.
    pub async fn after_delete(&self, record: &Record) {
        for listener in &self.listeners {
            listener.after_delete(record).await;
        }
    }

    /// Dispatch the cancellable before-save notification.
    pub async fn before_save(&self, record: &Record) -> HookOutcome {
        for listener in &self.listeners {
            if let HookDecision::Cancel { result } = listener.before_save(record).await {
                return HookOutcome {
                    cancelled: true,
                    result: Some(result),
                };
            }
        }
        HookOutcome {
            cancelled: false,
            result: None,
        }
    }

    /// Dispatch the after-save notification to every listener.
    pub async fn after_save(&self, record: &Record) {
        for listener in &self.listeners {
            listener.after_save(record).await;
        }
    }
}
