use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Content root {path} is not a directory {location}")]
    ContentRoot {
        path: PathBuf,
        location: ErrorLocation,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create an application (app list / bindings) error
    #[track_caller]
    pub fn apps<S: Into<String>>(message: S) -> Self {
        Self::generic("Apps", message)
    }

    /// Create a process mode error
    #[track_caller]
    pub fn process_mode<S: Into<String>>(message: S) -> Self {
        Self::generic("ProcessMode", message)
    }

    /// Create an observability error
    #[track_caller]
    pub fn observability<S: Into<String>>(message: S) -> Self {
        Self::generic("Observability", message)
    }

    /// Create a lifecycle error
    #[track_caller]
    pub fn lifecycle<S: Into<String>>(message: S) -> Self {
        Self::generic("Lifecycle", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
