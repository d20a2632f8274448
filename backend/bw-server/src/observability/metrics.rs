use metrics::counter;

const QUEUED: &str = "bw_server.request_log.queued";
const DROPPED: &str = "bw_server.request_log.dropped";
const WRITTEN: &str = "bw_server.request_log.written";
const FAILED: &str = "bw_server.request_log.failed";

/// Counters for the request log pipeline
///
/// Names and labels are static so recording on the request path does not
/// allocate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchMetrics;

impl DispatchMetrics {
    pub fn new() -> Self {
        Self
    }

    pub fn record_queued(&self, label: &'static str) {
        counter!(QUEUED, "label" => label).increment(1);
    }

    pub fn record_dropped(&self) {
        counter!(DROPPED).increment(1);
    }

    pub fn record_written(&self) {
        counter!(WRITTEN).increment(1);
    }

    pub fn record_failed(&self) {
        counter!(FAILED).increment(1);
    }
}
