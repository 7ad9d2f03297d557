//! Vote REST API handlers

use crate::{ApiError, ApiResult, AppState, JsonBody, MessageResponse, VoteRequest};

use axum::{Json, extract::State};
use chrono::Utc;

/// POST /api/vote
///
/// Cast a ranked ballot in an open poll
pub async fn vote_in_poll(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<VoteRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if req.username.trim().is_empty() {
        return Err(ApiError::validation(
            "Invalid username!",
            "username can't be empty",
            Some("Username"),
        ));
    }

    state
        .store
        .cast_vote(req.poll_id, &req.username, &req.options, Utc::now())
        .await?;

    Ok(Json(MessageResponse::new(format!(
        "Vote from {} registered!",
        req.username
    ))))
}
