use std::io;

use log::Level;

/// Destination of rendered request log records.
///
/// Called from the dispatcher's worker only, one record at a time.
pub trait LogSink: Send + Sync + 'static {
    fn write(&self, level: Level, message: &str) -> io::Result<()>;
}

/// Forwards records to the `log` facade under the `bamweb::requests` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCrateSink;

pub const REQUEST_LOG_TARGET: &str = "bamweb::requests";

impl LogSink for LogCrateSink {
    fn write(&self, level: Level, message: &str) -> io::Result<()> {
        log::log!(target: REQUEST_LOG_TARGET, level, "{message}");
        Ok(())
    }
}
