//! Poll REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreatePollRequest, CreatePollResponse, JsonBody, StoreError,
};

use rp_core::{INVALID_OPTION_COUNT, Room, RoomDto};

use std::time::Duration;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use uuid::Uuid;

const POLL_NOT_FOUND_MESSAGE: &str = "Poll not found!";

/// POST /api/poll
///
/// Create a poll that accepts votes for `PollingDuration`
pub async fn create_poll(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreatePollRequest>,
) -> ApiResult<Json<CreatePollResponse>> {
    let limits = &state.poll_config;

    if req.title.chars().count() > limits.max_title_length {
        return Err(ApiError::validation(
            "Invalid title!",
            format!(
                "title can't be longer than {} characters",
                limits.max_title_length
            ),
            Some("Title"),
        ));
    }

    if req.poll_options.len() > limits.max_options {
        return Err(ApiError::validation(
            INVALID_OPTION_COUNT,
            format!(
                "can't have a poll with more than {} options",
                limits.max_options
            ),
            Some("PollOptions"),
        ));
    }

    let duration = req
        .polling_duration
        .map(Duration::from_nanos)
        .unwrap_or_else(|| limits.default_duration());

    let room = Room::create(req.title, req.poll_options, duration, Utc::now())?;
    let poll_id = state.store.insert_room(room).await;

    Ok(Json(CreatePollResponse {
        poll_id,
        msg: "Success!".to_string(),
    }))
}

/// GET /api/poll/{poll_id}
///
/// Get a poll. An ended poll is returned with its summary.
pub async fn get_poll(
    State(state): State<AppState>,
    Path(poll_id): Path<String>,
) -> ApiResult<Json<RoomDto>> {
    let poll_id = Uuid::parse_str(&poll_id)
        .map_err(|e| ApiError::not_found(POLL_NOT_FOUND_MESSAGE, e.to_string()))?;

    let room = state
        .store
        .room_snapshot(poll_id, Utc::now())
        .await
        .map_err(|e| match e {
            StoreError::RoomNotFound { .. } => {
                ApiError::not_found(POLL_NOT_FOUND_MESSAGE, "the poll was not found")
            }
            other => ApiError::from(other),
        })?;

    Ok(Json(room.into()))
}
