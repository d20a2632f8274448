use bw_config::ConfigError;
use bw_engine::EngineError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration failed: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Failed to construct server engine: {source} {location}")]
    EngineInit {
        #[source]
        source: EngineError,
        location: ErrorLocation,
    },

    #[error("Server engine failed to start: {source} {location}")]
    EngineStart {
        #[source]
        source: EngineError,
        location: ErrorLocation,
    },

    #[error("Server engine failed to stop cleanly: {source} {location}")]
    EngineStop {
        #[source]
        source: EngineError,
        location: ErrorLocation,
    },

    #[error("Failed to attach request logging: {source} {location}")]
    Observability {
        #[source]
        source: EngineError,
        location: ErrorLocation,
    },

    #[error("Logger initialization failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl ServerError {
    #[track_caller]
    pub fn engine_init(source: EngineError) -> Self {
        Self::EngineInit {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn engine_start(source: EngineError) -> Self {
        Self::EngineStart {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn engine_stop(source: EngineError) -> Self {
        Self::EngineStop {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn observability(source: EngineError) -> Self {
        Self::Observability {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::Config {
                source: ConfigError::ContentRoot { .. },
                ..
            } => "The content root does not exist. Pass an existing directory with --content.",
            Self::Config { .. } => {
                "bamweb.toml has invalid settings. \
                   Check the logs for details or remove the file to use defaults."
            }
            Self::EngineInit { .. } => {
                "The server could not be built from the configuration. \
                   Check that at least one app is configured."
            }
            Self::EngineStart {
                source: EngineError::Bind { .. },
                ..
            } => {
                "A configured host binding is unavailable. \
                   Close the application using the port or change the binding."
            }
            Self::EngineStart { .. } => "The server failed to start. Check the logs for details.",
            Self::EngineStop { .. } => {
                "The server did not shut down cleanly. It has been released; \
                   starting again creates a fresh instance."
            }
            Self::Logger { .. } => "Check BW_LOG_FILE points to a writable location.",
            _ => "An unexpected error occurred. Please check the logs for details.",
        }
    }
}

impl From<ConfigError> for ServerError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for ServerError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
