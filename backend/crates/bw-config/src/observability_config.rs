use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY, MIN_QUEUE_CAPACITY,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log records buffered before new ones are dropped
    pub queue_capacity: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl ObservabilityConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_QUEUE_CAPACITY..=MAX_QUEUE_CAPACITY).contains(&self.queue_capacity) {
            return Err(ConfigError::observability(format!(
                "observability.queue_capacity must be {}-{}, got {}",
                MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY, self.queue_capacity
            )));
        }

        Ok(())
    }
}
