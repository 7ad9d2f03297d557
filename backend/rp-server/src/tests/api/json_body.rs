use crate::JsonBody;
use crate::api::extractors::json_body::INVALID_OBJECT_MESSAGE;

use axum::{
    body::Body,
    extract::FromRequest,
    http::{Request, header::CONTENT_TYPE},
    response::IntoResponse,
};
use http::StatusCode;
use http_body_util::BodyExt;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Payload {
    username: String,
}

fn json_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_valid_body_is_extracted() {
    let JsonBody(payload) = JsonBody::<Payload>::from_request(json_request(r#"{"Username":"ana"}"#), &())
        .await
        .unwrap();

    assert_eq!(payload.username, "ana");
}

#[tokio::test]
async fn test_malformed_body_is_rejected_with_invalid_object() {
    let rejection = JsonBody::<Payload>::from_request(json_request("{not json"), &())
        .await
        .err()
        .unwrap();

    let response = rejection.into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["Msg"], INVALID_OBJECT_MESSAGE);
    assert!(!json["Reason"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"Username":"ana"}"#))
        .unwrap();

    let rejection = JsonBody::<Payload>::from_request(request, &()).await.err().unwrap();

    assert_eq!(rejection.into_response().status(), StatusCode::BAD_REQUEST);
}
