//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use crate::StoreError;

use rp_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error body with code, message, reason, and optional field
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub msg: String,
    /// What exactly went wrong
    pub reason: String,
    /// Request field this error is about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} ({reason}) {location}")]
    NotFound {
        message: String,
        reason: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} ({reason}) {location}")]
    Validation {
        message: String,
        reason: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} ({reason}) {location}")]
    BadRequest {
        message: String,
        reason: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} ({reason}) {location}")]
    Internal {
        message: String,
        reason: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(
        message: impl Into<String>,
        reason: impl Into<String>,
        field: Option<&str>,
    ) -> Self {
        Self::Validation {
            message: message.into(),
            reason: reason.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            reason: reason.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::NotFound {
                message, reason, ..
            } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    msg: message,
                    reason,
                    field: None,
                },
            ),
            ApiError::Validation {
                message,
                reason,
                field,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    msg: message,
                    reason,
                    field,
                },
            ),
            ApiError::BadRequest {
                message, reason, ..
            } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    msg: message,
                    reason,
                    field: None,
                },
            ),
            ApiError::Internal {
                message, reason, ..
            } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    msg: message,
                    reason,
                    field: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Convert domain rule violations to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let field = match &e {
            CoreError::InvalidOptionCount { .. } | CoreError::DuplicateOption { .. } => {
                Some("PollOptions")
            }
            CoreError::IncompleteBallot { .. }
            | CoreError::ZeroRank { .. }
            | CoreError::RankOutOfRange { .. } => Some("Options"),
            CoreError::AlreadyVoted { .. } => Some("Username"),
            CoreError::PollClosed { .. } => None,
        };

        ApiError::Validation {
            message: e.message().to_string(),
            reason: e.reason(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store errors to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::RoomNotFound { poll_id, .. } => ApiError::NotFound {
                message: "The room was not found!".to_string(),
                reason: format!("no room with id {poll_id}"),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::InvalidCredentials { .. } => ApiError::BadRequest {
                message: "Invalid credentials".to_string(),
                reason: "password/username don't match".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            StoreError::PasswordHash { message, .. } => {
                // Don't expose hashing details to clients
                log::error!("Password hashing error: {}", message);
                ApiError::Internal {
                    message: "Failed to process credentials".to_string(),
                    reason: "internal error".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            StoreError::BlockingTask { message, .. } => {
                log::error!("Blocking task error: {}", message);
                ApiError::Internal {
                    message: "Failed to process credentials".to_string(),
                    reason: "internal error".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            StoreError::Core(core) => ApiError::from(core),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
