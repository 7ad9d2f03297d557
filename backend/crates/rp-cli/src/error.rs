use crate::ClientError;

use rp_startup::{StartupError, StorageError};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Local storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Startup error: {0}")]
    Startup(#[from] StartupError),

    #[error("Config error: {0}")]
    Config(#[from] rp_config::ConfigError),

    #[error("No user given and nobody is logged in, use --username or `rp user login` {location}")]
    NoUser { location: ErrorLocation },

    #[error("Failed to write output: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to start async runtime: {source}")]
    Runtime {
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Recovery advice to print after the error, when there is any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Storage(e) => Some(e.recovery_hint()),
            _ => None,
        }
    }

    #[track_caller]
    pub fn no_user() -> Self {
        Self::NoUser {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
