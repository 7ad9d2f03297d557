use serde::{Deserialize, Serialize};

/// Position a voter gave to one poll option. Position 1 is the top choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Rank {
    pub option: String,
    pub position: u32,
}

impl Rank {
    pub fn new(option: impl Into<String>, position: u32) -> Self {
        Self {
            option: option.into(),
            position,
        }
    }
}
