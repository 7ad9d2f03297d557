use rp_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Room {poll_id} not found {location}")]
    RoomNotFound {
        poll_id: Uuid,
        location: ErrorLocation,
    },

    #[error("Password mismatch for user {username} {location}")]
    InvalidCredentials {
        username: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Blocking task failed: {message} {location}")]
    BlockingTask {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    #[track_caller]
    pub fn room_not_found(poll_id: Uuid) -> Self {
        Self::RoomNotFound {
            poll_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials(username: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn password_hash(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHash {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn blocking_task(err: tokio::task::JoinError) -> Self {
        Self::BlockingTask {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
