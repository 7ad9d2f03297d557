use crate::{Client, ClientError};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_json_error_converts_with_message() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = ClientError::from(json_err);

    assert!(matches!(err, ClientError::Json { .. }));
    assert!(err.api_message().is_none());
}
