use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;
use uuid::Uuid;

/// Client-facing message for polls with too few or too many options
pub const INVALID_OPTION_COUNT: &str = "Invalid option count!";

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid option count: {reason} {location}")]
    InvalidOptionCount {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Duplicate poll option: {option} {location}")]
    DuplicateOption {
        option: String,
        location: ErrorLocation,
    },

    #[error("Incomplete ballot: no option {option} found {location}")]
    IncompleteBallot {
        option: String,
        location: ErrorLocation,
    },

    #[error("Zero rank: option {option} has 0 rank {location}")]
    ZeroRank {
        option: String,
        location: ErrorLocation,
    },

    #[error("Rank out of range: option {option} has rank {position} (max {max}) {location}")]
    RankOutOfRange {
        option: String,
        position: u32,
        max: u32,
        location: ErrorLocation,
    },

    #[error("User {username} has already voted {location}")]
    AlreadyVoted {
        username: String,
        location: ErrorLocation,
    },

    #[error("Poll {poll_id} has ended {location}")]
    PollClosed {
        poll_id: Uuid,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn invalid_option_count(count: usize) -> Self {
        let reason = match count {
            0 => String::from("can't have a poll with 0 options"),
            1 => String::from("can't have a poll with only 1 option"),
            n => format!("can't have a poll with {n} options"),
        };
        Self::InvalidOptionCount {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn duplicate_option(option: impl Into<String>) -> Self {
        Self::DuplicateOption {
            option: option.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn incomplete_ballot(option: impl Into<String>) -> Self {
        Self::IncompleteBallot {
            option: option.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn zero_rank(option: impl Into<String>) -> Self {
        Self::ZeroRank {
            option: option.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn rank_out_of_range(option: impl Into<String>, position: u32, max: u32) -> Self {
        Self::RankOutOfRange {
            option: option.into(),
            position,
            max,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn already_voted(username: impl Into<String>) -> Self {
        Self::AlreadyVoted {
            username: username.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn poll_closed(poll_id: Uuid) -> Self {
        Self::PollClosed {
            poll_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Short message shown to API clients
    pub fn message(&self) -> &'static str {
        match self {
            Self::InvalidOptionCount { .. } => INVALID_OPTION_COUNT,
            Self::DuplicateOption { .. } => "Duplicate poll option!",
            Self::IncompleteBallot { .. } => "Incomplete voting options!",
            Self::ZeroRank { .. } => "The 0 rank is not existent!",
            Self::RankOutOfRange { .. } => "An option has a rank greater than voting options!",
            Self::AlreadyVoted { .. } => "The user has already voted!",
            Self::PollClosed { .. } => "The poll already ended!",
        }
    }

    /// Detail of what went wrong, without the source location
    pub fn reason(&self) -> String {
        match self {
            Self::InvalidOptionCount { reason, .. } => reason.clone(),
            Self::DuplicateOption { option, .. } => format!("option {option} appears twice"),
            Self::IncompleteBallot { option, .. } => format!("no option {option} found"),
            Self::ZeroRank { option, .. } => format!("option {option} has 0 rank"),
            Self::RankOutOfRange { option, .. } => format!("option {option} has a big rank"),
            Self::AlreadyVoted { .. } => String::from("a user can't vote twice"),
            Self::PollClosed { .. } => String::from("the poll has ended"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
