use crate::{ConfigError, ConfigErrorResult, DEFAULT_SETTLE_DELAY_MS, MAX_SETTLE_DELAY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Pause after start so buffered console output lands before the prompt
    pub settle_delay_ms: u64,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl LifecycleConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.settle_delay_ms > MAX_SETTLE_DELAY_MS {
            return Err(ConfigError::lifecycle(format!(
                "lifecycle.settle_delay_ms must be <= {}, got {}",
                MAX_SETTLE_DELAY_MS, self.settle_delay_ms
            )));
        }

        Ok(())
    }
}
