//! Request logging taps.
//!
//! Engine events are turned into [`LogRecord`]s on the request path and
//! handed to a [`LogDispatcher`]; rendering and writing happen on its worker.

mod bus;
mod log_dispatcher;
mod log_record;
mod log_sink;
mod metrics;

pub use bus::ObservabilityBus;
pub use log_dispatcher::{DispatchStats, LogDispatcher};
pub use log_record::{LogRecord, NOT_RESPONDED_LABEL, PROXY_RESPONDED_LABEL, RESPONDED_LABEL};
pub use log_sink::{LogCrateSink, LogSink, REQUEST_LOG_TARGET};
pub use metrics::DispatchMetrics;
