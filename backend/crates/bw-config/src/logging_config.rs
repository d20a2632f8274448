use crate::env::{apply_env_bool, apply_env_option_string, apply_env_parse};
use crate::{DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

/// Process logger settings.
///
/// The logger is installed before any content root is known, so these come
/// from the environment only: `BW_LOG_LEVEL`, `BW_LOG_COLORED`, `BW_LOG_FILE`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub colored: bool,
    /// Append to this file instead of stdout
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        apply_env_parse("BW_LOG_LEVEL", &mut config.level);
        apply_env_bool("BW_LOG_COLORED", &mut config.colored);
        apply_env_option_string("BW_LOG_FILE", &mut config.file);
        config
    }
}
