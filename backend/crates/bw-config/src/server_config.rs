use crate::{
    AppConfig, AppFilter, ConfigError, ConfigErrorResult, DEFAULT_APP_NAME, HostBinding,
    ProcessMode,
};

use std::collections::HashSet;

use log::warn;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub apps: Vec<AppConfig>,
    /// Modes this server is configured to run in
    pub process_modes: Vec<ProcessMode>,
    /// Persisted default mode, applied unless overridden on the command line
    pub process_mode: Option<ProcessMode>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            apps: vec![AppConfig::new(
                DEFAULT_APP_NAME,
                vec![HostBinding::default()],
            )],
            process_modes: ProcessMode::ALL.to_vec(),
            process_mode: None,
        }
    }
}

impl ServerConfig {
    /// Keep only the apps named by `filter`. An empty filter keeps everything.
    pub fn retain_apps(&mut self, filter: &AppFilter) {
        if filter.is_empty() {
            return;
        }

        for name in filter.names() {
            if !self.apps.iter().any(|a| a.name.eq_ignore_ascii_case(name)) {
                warn!("App '{name}' was requested but is not configured");
            }
        }

        self.apps.retain(|app| filter.matches(&app.name));
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.apps.is_empty() {
            return Err(ConfigError::apps("no applications to serve"));
        }

        let mut seen = HashSet::new();
        for app in &self.apps {
            app.validate()?;

            if !seen.insert(app.name.to_ascii_lowercase()) {
                return Err(ConfigError::apps(format!(
                    "app '{}' is configured more than once",
                    app.name
                )));
            }
        }

        if self.process_modes.is_empty() {
            return Err(ConfigError::process_mode(
                "server.process_modes must list at least one mode",
            ));
        }

        Ok(())
    }
}
