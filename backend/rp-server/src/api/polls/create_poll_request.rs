use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatePollRequest {
    pub title: String,

    #[serde(default)]
    pub poll_options: Vec<String>,

    /// How long the poll accepts votes, in nanoseconds. Missing means the
    /// configured default.
    #[serde(default)]
    pub polling_duration: Option<u64>,
}
