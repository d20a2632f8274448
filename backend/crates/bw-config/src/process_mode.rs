use crate::{ConfigError, ConfigErrorResult};

use std::fmt;
use std::str::FromStr;

use log::Level;
use serde::{Deserialize, Deserializer};

/// Deployment context the server runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessMode {
    #[default]
    Development,
    Test,
    Production,
}

impl ProcessMode {
    pub const ALL: [ProcessMode; 3] = [Self::Development, Self::Test, Self::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "Development",
            Self::Test => "Test",
            Self::Production => "Production",
        }
    }

    /// Log level used when announcing this mode.
    ///
    /// Anything other than development is worth an operator's attention.
    pub fn severity(&self) -> Level {
        match self {
            Self::Development => Level::Info,
            Self::Test | Self::Production => Level::Warn,
        }
    }
}

impl fmt::Display for ProcessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Production),
            other => Err(ConfigError::process_mode(format!(
                "unknown process mode '{other}' (expected development, test or production)"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for ProcessMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProcessMode::from_str(&s).map_err(serde::de::Error::custom)
    }
}
