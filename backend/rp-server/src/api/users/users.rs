//! User REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CreateOrLoginRequest, JsonBody, LoginOutcome, MessageResponse,
};

use axum::{Json, extract::State};

/// POST /api/user
///
/// Register an unknown user, or log in a known one
pub async fn create_or_login_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateOrLoginRequest>,
) -> ApiResult<Json<MessageResponse>> {
    if req.username.trim().is_empty() {
        return Err(ApiError::validation(
            "Invalid credentials",
            "username can't be empty",
            Some("Username"),
        ));
    }

    let outcome = state
        .store
        .register_or_login(&req.username, &req.password)
        .await?;

    let msg = match outcome {
        LoginOutcome::Registered => format!("Registered {} user!", req.username),
        LoginOutcome::LoggedIn => format!("User {} logging in!", req.username),
    };

    Ok(Json(MessageResponse::new(msg)))
}
