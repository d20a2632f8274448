use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to bind {addr}: {source} {location}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Engine is already running {location}")]
    AlreadyRunning { location: ErrorLocation },

    #[error("Listener on {addr} failed: {source} {location}")]
    Serve {
        addr: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Listener task on {addr} did not finish cleanly: {message} {location}")]
    Join {
        addr: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Event hub is closed {location}")]
    HubClosed { location: ErrorLocation },

    #[error("Engine construction failed: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },
}

impl EngineError {
    #[track_caller]
    pub fn already_running() -> Self {
        Self::AlreadyRunning {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn hub_closed() -> Self {
        Self::HubClosed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn build<S: Into<String>>(message: S) -> Self {
        Self::Build {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
