//! Room entity - a ranked-choice poll and the votes cast in it.

use crate::{CoreError, MIN_POLL_OPTIONS, PollSummary, Result as CoreErrorResult, Vote, tally};

use std::collections::{BTreeMap, HashSet};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Uuid,
    pub title: String,
    pub options: Vec<String>,
    /// Ballots keyed by username
    pub votes: BTreeMap<String, Vote>,
    /// Computed once, the first time the room is read after it closes
    pub summary: Option<PollSummary>,
    pub valid_until: DateTime<Utc>,
}

impl Room {
    /// Create a new room that accepts votes for `polling_duration` after `now`.
    #[track_caller]
    pub fn create(
        title: String,
        options: Vec<String>,
        polling_duration: Duration,
        now: DateTime<Utc>,
    ) -> CoreErrorResult<Self> {
        if options.len() < MIN_POLL_OPTIONS {
            return Err(CoreError::invalid_option_count(options.len()));
        }

        let mut seen = HashSet::with_capacity(options.len());
        if let Some(duplicate) = options.iter().find(|option| !seen.insert(option.as_str())) {
            return Err(CoreError::duplicate_option(duplicate.clone()));
        }

        let valid_until = TimeDelta::from_std(polling_duration)
            .ok()
            .and_then(|delta| now.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            options,
            votes: BTreeMap::new(),
            summary: None,
            valid_until,
        })
    }

    /// A room has ended once `now` is strictly past `valid_until`
    pub fn has_ended_at(&self, now: DateTime<Utc>) -> bool {
        now > self.valid_until
    }

    pub fn has_voted(&self, username: &str) -> bool {
        self.votes.contains_key(username)
    }

    /// Record a ballot. Each user votes once, and only while the room is open.
    #[track_caller]
    pub fn add_vote(&mut self, vote: Vote, now: DateTime<Utc>) -> CoreErrorResult<()> {
        if self.has_voted(&vote.username) {
            return Err(CoreError::already_voted(vote.username));
        }

        if self.has_ended_at(now) {
            return Err(CoreError::poll_closed(self.id));
        }

        self.votes.insert(vote.username.clone(), vote);
        Ok(())
    }

    /// Compute the summary if the room has ended and has none yet.
    ///
    /// Returns `true` when a summary was computed by this call.
    pub fn summarize_if_ended(&mut self, now: DateTime<Utc>) -> bool {
        if self.summary.is_some() || !self.has_ended_at(now) {
            return false;
        }

        debug!("Computing summary for room {}", self.id);
        self.summary = Some(tally::compute_summary(&self.options, &self.votes));
        true
    }
}
