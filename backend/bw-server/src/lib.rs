//! bamweb server lifecycle.
//!
//! [`ServerController`] owns the single running engine of the process and
//! drives it through start, stop and restart. With `verbose` set, the
//! [`ObservabilityBus`] taps the engine's request events and writes them to
//! the request log without blocking the request path.

pub mod cli;
pub mod config_source;
pub mod error;
pub mod interactive;
pub mod launch_options;
pub mod lifecycle;
pub mod logger;
pub mod observability;
pub mod process_mode_state;
pub mod server_handle;
pub mod server_state;
pub mod startup_summary;

#[cfg(test)]
mod tests;

pub use cli::{Action, Cli};
pub use config_source::{ConfigSource, ContentRootSource};
pub use error::{Result as ServerResult, ServerError};
pub use interactive::{ConsoleCommand, run_console};
pub use launch_options::LaunchOptions;
pub use lifecycle::ServerController;
pub use observability::{LogCrateSink, LogDispatcher, LogRecord, LogSink, ObservabilityBus};
pub use process_mode_state::ProcessModeState;
pub use server_handle::ServerHandle;
pub use server_state::ServerState;
