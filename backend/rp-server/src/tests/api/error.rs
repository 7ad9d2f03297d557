use crate::{ApiError, StoreError};

use rp_core::CoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "Poll not found!".into(),
        reason: "the poll was not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["Code"], "NOT_FOUND");
    assert_eq!(json["Msg"], "Poll not found!");
    assert_eq!(json["Reason"], "the poll was not found");
    assert!(json.get("Field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::validation("Invalid title!", "too long", Some("Title"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["Code"], "VALIDATION_ERROR");
    assert_eq!(json["Field"], "Title");
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let (status, json) = body_json(ApiError::bad_request("Invalid credentials", "nope")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["Code"], "BAD_REQUEST");
    assert_eq!(json["Msg"], "Invalid credentials");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Failed", "boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["Code"], "INTERNAL_ERROR");
}

#[test]
fn test_core_error_converts_to_validation_with_public_message() {
    let api_error: ApiError = CoreError::zero_rank("Pizza").into();

    match api_error {
        ApiError::Validation {
            message,
            reason,
            field,
            ..
        } => {
            assert_eq!(message, "The 0 rank is not existent!");
            assert_eq!(reason, "option Pizza has 0 rank");
            assert_eq!(field.as_deref(), Some("Options"));
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_room_not_found_converts_to_not_found() {
    let api_error: ApiError = StoreError::room_not_found(Uuid::nil()).into();

    assert!(matches!(api_error, ApiError::NotFound { ref message, .. } if message == "The room was not found!"));
}

#[test]
fn test_invalid_credentials_converts_to_bad_request() {
    let api_error: ApiError = StoreError::invalid_credentials("ana").into();

    match api_error {
        ApiError::BadRequest { message, reason, .. } => {
            assert_eq!(message, "Invalid credentials");
            assert_eq!(reason, "password/username don't match");
        }
        other => panic!("Expected BadRequest, got {other:?}"),
    }
}

#[test]
fn test_wrapped_core_error_keeps_core_mapping() {
    let api_error: ApiError = StoreError::from(CoreError::already_voted("ana")).into();

    assert!(matches!(api_error, ApiError::Validation { ref message, .. } if message == "The user has already voted!"));
}
