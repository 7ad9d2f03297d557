#![allow(dead_code)]

//! Test infrastructure for rp-server API tests

use rp_core::Room;
use rp_server::{AppState, PollStore, build_router};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use chrono::{TimeDelta, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    AppState {
        store: PollStore::new(),
        poll_config: rp_config::PollConfig::default(),
    }
}

/// Send one request through a fresh router and decode the JSON reply
pub async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let app = build_router(state.clone());

    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Create an open poll with the given options
pub async fn create_test_poll(state: &AppState, options: &[&str]) -> Uuid {
    let room = Room::create(
        "Test Poll".to_string(),
        options.iter().map(|o| o.to_string()).collect(),
        Duration::from_secs(3600),
        Utc::now(),
    )
    .unwrap();

    state.store.insert_room(room).await
}

/// Create a poll whose voting window closed an hour ago
pub async fn create_expired_poll(state: &AppState, options: &[&str]) -> Uuid {
    let room = Room::create(
        "Expired Poll".to_string(),
        options.iter().map(|o| o.to_string()).collect(),
        Duration::from_secs(60),
        Utc::now() - TimeDelta::hours(1),
    )
    .unwrap();

    state.store.insert_room(room).await
}
