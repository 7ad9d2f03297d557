use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Outcome of a closed poll.
///
/// `rounds` holds the cumulative tally of every round that was computed,
/// ending with the round that decided the winner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PollSummary {
    pub rounds: Vec<BTreeMap<String, u32>>,
    /// `None` when nobody voted
    pub winner: Option<String>,
    pub winner_vote_count: u32,
    pub total_vote_count: u32,
}
