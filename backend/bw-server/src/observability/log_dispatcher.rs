use crate::observability::{DispatchMetrics, LogRecord, LogSink};

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};

use log::{debug, warn};
use tokio::sync::mpsc::{self, error::TrySendError};

const WORKER_THREAD_NAME: &str = "bamweb-request-log";

/// Warn on the first dropped record and then once per this many.
const DROP_WARN_INTERVAL: u64 = 1_000;

/// Running totals for one dispatcher.
#[derive(Debug, Default)]
pub struct DispatchStats {
    queued: AtomicU64,
    dropped: AtomicU64,
    written: AtomicU64,
    failed: AtomicU64,
}

impl DispatchStats {
    pub fn queued(&self) -> u64 {
        self.queued.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }
}

/// Bounded hand-off between request handlers and a single log worker.
///
/// [`dispatch`](Self::dispatch) never waits: when the queue is full the new
/// record is dropped and counted. The worker is a dedicated OS thread, so a
/// slow sink never occupies a runtime worker. It exits once every dispatcher
/// clone is dropped and the queue is drained.
#[derive(Clone)]
pub struct LogDispatcher {
    tx: mpsc::Sender<LogRecord>,
    stats: Arc<DispatchStats>,
    metrics: DispatchMetrics,
}

impl LogDispatcher {
    pub fn spawn(
        capacity: usize,
        sink: Arc<dyn LogSink>,
    ) -> std::io::Result<(Self, JoinHandle<()>)> {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        let stats = Arc::new(DispatchStats::default());
        let metrics = DispatchMetrics::new();

        let worker_stats = stats.clone();
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || run_worker(rx, sink, worker_stats, metrics))?;

        Ok((Self { tx, stats, metrics }, worker))
    }

    pub fn stats(&self) -> &Arc<DispatchStats> {
        &self.stats
    }

    /// Enqueue `record`. Returns false if it was dropped.
    pub fn dispatch(&self, record: LogRecord) -> bool {
        let label = record.label;

        match self.tx.try_send(record) {
            Ok(()) => {
                self.stats.queued.fetch_add(1, Ordering::Relaxed);
                self.metrics.record_queued(label);
                true
            }
            Err(TrySendError::Full(_)) => {
                let dropped = self.stats.dropped.fetch_add(1, Ordering::Relaxed) + 1;
                self.metrics.record_dropped();
                if dropped % DROP_WARN_INTERVAL == 1 {
                    warn!("Request log queue full, {dropped} record(s) dropped so far");
                }
                false
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Request log worker has exited, record discarded");
                false
            }
        }
    }
}

fn run_worker(
    mut rx: mpsc::Receiver<LogRecord>,
    sink: Arc<dyn LogSink>,
    stats: Arc<DispatchStats>,
    metrics: DispatchMetrics,
) {
    while let Some(record) = rx.blocking_recv() {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            sink.write(record.level, &record.render())
        }));

        match outcome {
            Ok(Ok(())) => {
                stats.written.fetch_add(1, Ordering::Relaxed);
                metrics.record_written();
            }
            Ok(Err(e)) => {
                stats.failed.fetch_add(1, Ordering::Relaxed);
                metrics.record_failed();
                debug!("Request log sink failed: {e}");
            }
            Err(_) => {
                stats.failed.fetch_add(1, Ordering::Relaxed);
                metrics.record_failed();
                debug!("Request log sink panicked");
            }
        }
    }

    debug!("Request log worker finished");
}
