mod models;

use crate::{Rank, Vote};

/// Build a vote from `(option, position)` pairs
pub(crate) fn vote(username: &str, ranks: &[(&str, u32)]) -> Vote {
    Vote {
        username: username.to_string(),
        ranking: ranks
            .iter()
            .map(|(option, position)| Rank::new(*option, *position))
            .collect(),
    }
}

pub(crate) fn options(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
