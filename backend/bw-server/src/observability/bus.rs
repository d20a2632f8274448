use crate::error::{Result as ServerResult, ServerError};
use crate::observability::{LogCrateSink, LogDispatcher, LogRecord, LogSink};
use crate::server_handle::ServerHandle;

use bw_engine::{Engine, EventKind, SubscriptionId};

use std::sync::Arc;

use log::debug;

/// Routes a server's request events to the request log.
///
/// Each attachment gets its own dispatcher and worker thread. The taps hold
/// the only senders, so closing the handle's hub also ends the worker once
/// the queue drains.
#[derive(Clone)]
pub struct ObservabilityBus {
    sink: Arc<dyn LogSink>,
}

impl ObservabilityBus {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Subscribe the three logging taps to `handle`'s event hub.
    ///
    /// Attaching twice to the same handle registers nothing and returns an
    /// empty list.
    pub fn attach_logging<E: Engine>(
        &self,
        handle: &ServerHandle<E>,
    ) -> ServerResult<Vec<SubscriptionId>> {
        if !handle.claim_logging() {
            debug!("Request logging already attached to epoch {}", handle.epoch());
            return Ok(Vec::new());
        }

        let capacity = handle.config().observability.queue_capacity;
        let (dispatcher, _worker) = match LogDispatcher::spawn(capacity, self.sink.clone()) {
            Ok(spawned) => spawned,
            Err(e) => {
                handle.release_logging_claim();
                return Err(e.into());
            }
        };
        let events = handle.events();

        let mut subscriptions = Vec::with_capacity(EventKind::ALL.len());
        for kind in EventKind::ALL {
            let tap = dispatcher.clone();
            let subscribed = events.subscribe(kind, move |event| {
                tap.dispatch(LogRecord::from_event(event));
            });

            match subscribed {
                Ok(id) => subscriptions.push(id),
                Err(e) => {
                    for id in subscriptions {
                        events.unsubscribe(id);
                    }
                    handle.release_logging_claim();
                    return Err(ServerError::observability(e));
                }
            }
        }

        debug!(
            "Request logging attached to epoch {} (queue capacity {capacity})",
            handle.epoch()
        );

        Ok(subscriptions)
    }
}

impl Default for ObservabilityBus {
    fn default() -> Self {
        Self::new(Arc::new(LogCrateSink))
    }
}
