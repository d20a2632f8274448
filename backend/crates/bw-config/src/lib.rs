mod app_config;
mod app_filter;
mod config;
mod env;
mod error;
mod host_binding;
mod lifecycle_config;
mod log_level;
mod logging_config;
mod observability_config;
mod process_mode;
mod server_config;

#[cfg(test)]
mod tests;

pub use app_config::AppConfig;
pub use app_filter::AppFilter;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use host_binding::HostBinding;
pub use lifecycle_config::LifecycleConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use observability_config::ObservabilityConfig;
pub use process_mode::ProcessMode;
pub use server_config::ServerConfig;

/// Name of the configuration file looked up inside the content root.
pub const CONFIG_FILENAME: &str = "bamweb.toml";

/// Directory (relative to the content root) holding one folder per app.
pub const APPS_DIRECTORY: &str = "apps";

const DEFAULT_APP_NAME: &str = "localhost";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
const DEFAULT_QUEUE_CAPACITY: usize = 1024;
const MIN_QUEUE_CAPACITY: usize = 1;
const MAX_QUEUE_CAPACITY: usize = 65_536;
const DEFAULT_SETTLE_DELAY_MS: u64 = 30;
const MAX_SETTLE_DELAY_MS: u64 = 1_000;
