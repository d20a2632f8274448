use crate::env::{apply_env_option_parse, apply_env_parse};
use crate::{
    AppFilter, CONFIG_FILENAME, ConfigError, ConfigErrorResult, LifecycleConfig,
    ObservabilityConfig, ServerConfig,
};

use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Directory the configuration was loaded from
    #[serde(skip)]
    pub content_root: PathBuf,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
    pub lifecycle: LifecycleConfig,
}

impl Config {
    /// Build the configuration for a content root.
    ///
    /// Loading order:
    /// 1. The content root must be an existing directory
    /// 2. Load `bamweb.toml` from it if present, else use defaults
    /// 3. Apply BW_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    #[track_caller]
    pub fn load(content_root: &Path) -> ConfigErrorResult<Self> {
        if !content_root.is_dir() {
            return Err(ConfigError::ContentRoot {
                path: content_root.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let config_path = content_root.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            info!(
                "No {} in {}, using defaults",
                CONFIG_FILENAME,
                content_root.display()
            );
            Config::default()
        };

        config.content_root = content_root.to_path_buf();
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Restrict the served apps to those named by `filter`.
    pub fn retain_apps(&mut self, filter: &AppFilter) {
        self.server.retain_apps(filter);
    }

    /// Validate all configuration.
    /// Call after load() (and any app filtering) to catch errors before the
    /// engine is built.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.observability.validate()?;
        self.lifecycle.validate()?;
        Ok(())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.content_root.display());

        let apps: Vec<&str> = self.server.apps.iter().map(|a| a.name.as_str()).collect();
        info!("  apps: {}", apps.join(", "));

        let modes: Vec<&str> = self
            .server
            .process_modes
            .iter()
            .map(|m| m.as_str())
            .collect();
        info!(
            "  process modes: {} (persisted: {})",
            modes.join(", "),
            self.server
                .process_mode
                .map(|m| m.as_str())
                .unwrap_or("none")
        );

        info!(
            "  observability: queue_capacity={}",
            self.observability.queue_capacity
        );
        info!(
            "  lifecycle: settle_delay={}ms",
            self.lifecycle.settle_delay_ms
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        apply_env_option_parse("BW_PROCESS_MODE", &mut self.server.process_mode);

        // Observability
        apply_env_parse(
            "BW_OBSERVABILITY_QUEUE_CAPACITY",
            &mut self.observability.queue_capacity,
        );

        // Lifecycle
        apply_env_parse("BW_SETTLE_DELAY_MS", &mut self.lifecycle.settle_delay_ms);
    }
}
