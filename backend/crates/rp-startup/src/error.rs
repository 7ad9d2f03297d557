use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures that prevent the application from starting.
///
/// Parse and storage-read failures are absorbed by the loader and never
/// show up here.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Mount point '{id}' not found {location}")]
    MountNotFound { id: String, location: ErrorLocation },
}

impl StartupError {
    #[track_caller]
    pub fn mount_not_found(id: impl Into<String>) -> Self {
        Self::MountNotFound {
            id: id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StartupError>;
