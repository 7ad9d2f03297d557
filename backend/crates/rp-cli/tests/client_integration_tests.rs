//! Integration tests for the CLI client using wiremock mock server

use rp_cli::{Client, ClientError};

use std::collections::BTreeMap;
use std::time::Duration;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_string_contains, method, path},
};

#[tokio::test]
async fn test_login_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user"))
        .and(body_json(json!({"Username": "ana", "Password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Msg": "Registered ana user!"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client.login("ana", "secret").await.unwrap();

    assert_eq!(result["Msg"], "Registered ana user!");
}

#[tokio::test]
async fn test_create_poll_sends_duration_in_nanoseconds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/poll"))
        .and(body_json(json!({
            "Title": "Lunch",
            "PollOptions": ["Pizza", "Tacos"],
            "PollingDuration": 600_000_000_000u64
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "PollId": "00000000-0000-0000-0000-000000000001",
            "Msg": "Success!"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let result = client
        .create_poll(
            "Lunch",
            &["Pizza".to_string(), "Tacos".to_string()],
            Some(Duration::from_secs(600)),
        )
        .await
        .unwrap();

    assert_eq!(result["PollId"], "00000000-0000-0000-0000-000000000001");
}

#[tokio::test]
async fn test_create_poll_without_duration_omits_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/poll"))
        .and(body_json(json!({"Title": "Lunch", "PollOptions": ["A", "B"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Msg": "Success!"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    client
        .create_poll("Lunch", &["A".to_string(), "B".to_string()], None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_poll_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/poll/00000000-0000-0000-0000-000000000001"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "Code": "NOT_FOUND",
            "Msg": "Poll not found!",
            "Reason": "the poll was not found"
        })))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client
        .get_poll("00000000-0000-0000-0000-000000000001")
        .await
        .unwrap_err();

    match err {
        ClientError::Api {
            status,
            ref code,
            ref message,
            ref reason,
            ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(code, "NOT_FOUND");
            assert_eq!(message, "Poll not found!");
            assert_eq!(reason, "the poll was not found");
        }
        other => panic!("Expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_vote_sends_ranked_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/vote"))
        .and(body_string_contains("\"PollId\":\"poll-1\""))
        .and(body_json(json!({
            "Username": "ana",
            "PollId": "poll-1",
            "Options": {"A": 2, "B": 1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Msg": "ok"})))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let options = BTreeMap::from([("A".to_string(), 2), ("B".to_string(), 1)]);
    let result = client.vote("ana", "poll-1", &options).await.unwrap();

    assert_eq!(result["Msg"], "ok");
}

#[tokio::test]
async fn test_error_without_json_body_is_reported_as_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/poll/x"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = Client::new(&mock_server.uri());
    let err = client.get_poll("x").await.unwrap_err();

    assert!(err.to_string().contains("UNKNOWN"));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    let client = Client::new("http://127.0.0.1:1");
    let err = client.get_poll("x").await.unwrap_err();

    assert!(matches!(err, ClientError::Http { .. }));
}
