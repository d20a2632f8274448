use crate::{APPS_DIRECTORY, ConfigError, ConfigErrorResult, HostBinding};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One application served by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    pub name: String,
    /// Content directory relative to the content root (default: `apps/<name>`)
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub bindings: Vec<HostBinding>,
}

impl AppConfig {
    pub fn new<S: Into<String>>(name: S, bindings: Vec<HostBinding>) -> Self {
        Self {
            name: name.into(),
            root: None,
            bindings,
        }
    }

    /// Absolute content directory for this app.
    pub fn content_dir(&self, content_root: &Path) -> PathBuf {
        match self.root {
            Some(ref root) => content_root.join(root),
            None => content_root.join(APPS_DIRECTORY).join(&self.name),
        }
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::apps("app name cannot be empty"));
        }

        if self.bindings.is_empty() {
            return Err(ConfigError::apps(format!(
                "app '{}' must declare at least one binding",
                self.name
            )));
        }

        if let Some(binding) = self.bindings.iter().find(|b| b.host.trim().is_empty()) {
            return Err(ConfigError::apps(format!(
                "app '{}' has a binding with an empty host (port {})",
                self.name, binding.port
            )));
        }

        if let Some(ref root) = self.root
            && (Path::new(root).is_absolute() || root.contains(".."))
        {
            return Err(ConfigError::apps(format!(
                "app '{}' root must be relative and cannot contain '..'",
                self.name
            )));
        }

        Ok(())
    }
}
