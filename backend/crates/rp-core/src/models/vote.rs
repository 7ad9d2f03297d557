use crate::Rank;

use serde::{Deserialize, Serialize};

/// A single voter's complete ballot, one rank per poll option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vote {
    pub username: String,
    pub ranking: Vec<Rank>,
}

impl Vote {
    /// Position given to `option`, if the ballot ranks it
    pub fn position_of(&self, option: &str) -> Option<u32> {
        self.ranking
            .iter()
            .find(|rank| rank.option == option)
            .map(|rank| rank.position)
    }
}
