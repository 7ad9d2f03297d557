use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VoteRequest {
    pub username: String,
    pub poll_id: Uuid,
    /// Position of every option, starting at 1
    pub options: HashMap<String, u32>,
}
