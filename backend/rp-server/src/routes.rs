use crate::{
    AppState, create_or_login_user, create_poll, get_poll, health, middleware, vote_in_poll,
};

use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{ACCEPT, CONTENT_TYPE, ORIGIN},
    },
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Poll API
        .route("/api/user", post(create_or_login_user))
        .route("/api/poll", post(create_poll))
        .route("/api/poll/{poll_id}", get(get_poll))
        .route("/api/vote", post(vote_in_poll))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        .layer(cors_layer())
        .layer(from_fn(middleware::log_requests))
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            CONTENT_TYPE,
            ORIGIN,
            ACCEPT,
            HeaderName::from_static("token"),
        ])
}
