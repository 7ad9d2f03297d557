use crate::{PollSummary, Room, Vote};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Room DTO for JSON serialization, with `ValidUntil` as unix milliseconds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoomDto {
    pub id: Uuid,
    pub title: String,
    pub options: Vec<String>,
    pub votes: BTreeMap<String, Vote>,
    pub summary: Option<PollSummary>,
    pub valid_until: i64,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            title: r.title,
            options: r.options,
            votes: r.votes,
            summary: r.summary,
            valid_until: r.valid_until.timestamp_millis(),
        }
    }
}
