use bw_config::{AppFilter, Config, ConfigErrorResult};

use std::path::PathBuf;

/// Produces the configuration for one server construction.
///
/// Called exactly once per handle, under the lifecycle lock.
pub trait ConfigSource: Send + Sync + 'static {
    fn load(&self) -> ConfigErrorResult<Config>;
}

/// Loads `bamweb.toml` from a content root, filters apps and validates.
#[derive(Debug, Clone)]
pub struct ContentRootSource {
    content_root: PathBuf,
    apps: AppFilter,
}

impl ContentRootSource {
    pub fn new<P: Into<PathBuf>>(content_root: P, apps: AppFilter) -> Self {
        Self {
            content_root: content_root.into(),
            apps,
        }
    }

    pub fn content_root(&self) -> &std::path::Path {
        &self.content_root
    }
}

impl ConfigSource for ContentRootSource {
    fn load(&self) -> ConfigErrorResult<Config> {
        let mut config = Config::load(&self.content_root)?;
        config.retain_apps(&self.apps);
        config.validate()?;
        config.log_summary();
        Ok(config)
    }
}

/// A fixed, already resolved configuration.
impl ConfigSource for Config {
    fn load(&self) -> ConfigErrorResult<Config> {
        Ok(self.clone())
    }
}
