use crate::{CliClientResult, ClientError};

use std::collections::BTreeMap;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the rp-server REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);
        self.client.request(method, &url)
    }

    /// Execute request and handle errors
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if !status.is_success() {
            let field = |name: &str, fallback: &str| {
                body.get(name)
                    .and_then(|v| v.as_str())
                    .unwrap_or(fallback)
                    .to_string()
            };

            return Err(ClientError::Api {
                status: status.as_u16(),
                code: field("Code", "UNKNOWN"),
                message: field("Msg", "Unknown error"),
                reason: field("Reason", ""),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Register or log in
    pub async fn login(&self, username: &str, password: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let req = self
            .request(Method::POST, "/api/user")
            .json(&LoginRequest { username, password });
        self.execute(req).await
    }

    // =========================================================================
    // Poll Operations
    // =========================================================================

    /// Create a poll. `None` leaves the duration to the server default.
    pub async fn create_poll(
        &self,
        title: &str,
        options: &[String],
        duration: Option<Duration>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct CreateRequest<'a> {
            title: &'a str,
            poll_options: &'a [String],
            #[serde(skip_serializing_if = "Option::is_none")]
            polling_duration: Option<u64>,
        }

        let body = CreateRequest {
            title,
            poll_options: options,
            polling_duration: duration
                .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)),
        };
        let req = self.request(Method::POST, "/api/poll").json(&body);
        self.execute(req).await
    }

    /// Get a poll by ID
    pub async fn get_poll(&self, id: &str) -> CliClientResult<Value> {
        let req = self.request(Method::GET, &format!("/api/poll/{}", id));
        self.execute(req).await
    }

    // =========================================================================
    // Vote Operations
    // =========================================================================

    /// Cast a ballot giving each option its position
    pub async fn vote(
        &self,
        username: &str,
        poll_id: &str,
        options: &BTreeMap<String, u32>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "PascalCase")]
        struct VoteRequest<'a> {
            username: &'a str,
            poll_id: &'a str,
            options: &'a BTreeMap<String, u32>,
        }

        let body = VoteRequest {
            username,
            poll_id,
            options,
        };
        let req = self.request(Method::POST, "/api/vote").json(&body);
        self.execute(req).await
    }
}
