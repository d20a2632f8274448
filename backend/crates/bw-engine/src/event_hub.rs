//! Publish/subscribe hub between an engine and its observers.

use crate::{EngineError, EngineResult, EventKind, ServerEvent};

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, error};

/// Callback invoked on the publishing thread. Must be cheap and must not
/// call back into the hub.
pub type EventHandler = Arc<dyn Fn(&ServerEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    kind: EventKind,
    handler: EventHandler,
}

#[derive(Default)]
struct HubInner {
    subscriptions: Vec<Subscription>,
    closed: bool,
}

/// Event hub owned by one server handle.
///
/// Handlers run under the hub's read lock, so once [`close`](Self::close)
/// returns no handler is running and none will run again.
#[derive(Default)]
pub struct EventHub {
    inner: RwLock<HubInner>,
    next_id: AtomicU64,
}

impl EventHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events of `kind`.
    #[track_caller]
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> EngineResult<SubscriptionId>
    where
        F: Fn(&ServerEvent) + Send + Sync + 'static,
    {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        if inner.closed {
            return Err(EngineError::hub_closed());
        }

        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        inner.subscriptions.push(Subscription {
            id,
            kind,
            handler: Arc::new(handler),
        });

        debug!(
            "Subscribed {:?} to {} ({} total)",
            id,
            kind.as_str(),
            inner.subscriptions.len()
        );

        Ok(id)
    }

    /// Remove one subscription. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let before = inner.subscriptions.len();
        inner.subscriptions.retain(|s| s.id != id);
        inner.subscriptions.len() != before
    }

    /// Deliver `event` to every subscriber of its kind.
    ///
    /// A panicking handler is logged and skipped; the remaining handlers still
    /// run and nothing propagates to the publisher. Returns the number of
    /// handlers that completed.
    pub fn publish(&self, event: &ServerEvent) -> usize {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);

        if inner.closed {
            return 0;
        }

        let kind = event.kind();
        let mut delivered = 0;

        for subscription in inner.subscriptions.iter().filter(|s| s.kind == kind) {
            let handler = &subscription.handler;
            match catch_unwind(AssertUnwindSafe(|| handler(event))) {
                Ok(()) => delivered += 1,
                Err(_) => error!(
                    "Subscriber {:?} panicked handling {} for request {}",
                    subscription.id,
                    kind.as_str(),
                    event.request().request_id
                ),
            }
        }

        delivered
    }

    /// Drop every subscription and refuse new ones. Returns how many were removed.
    pub fn close(&self) -> usize {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.closed = true;
        let removed = inner.subscriptions.len();
        inner.subscriptions.clear();

        if removed > 0 {
            debug!("Event hub closed, {removed} subscriptions removed");
        }

        removed
    }

    pub fn is_closed(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .closed
    }

    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .subscriptions
            .iter()
            .filter(|s| s.kind == kind)
            .count()
    }
}
