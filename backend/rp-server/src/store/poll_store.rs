//! In-memory store of users and rooms shared by all handlers.

use crate::store::password::{hash_password, verify_password};
use crate::{StoreError, StoreResult};

use rp_core::{CoreError, Room, build_vote};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, info};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result of `POST /api/user`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Registered,
    LoggedIn,
}

#[derive(Clone, Default)]
pub struct PollStore {
    inner: Arc<RwLock<StoreInner>>,
}

#[derive(Default)]
struct StoreInner {
    /// Argon2 PHC strings keyed by username
    users: HashMap<String, String>,
    rooms: HashMap<Uuid, Room>,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `username` on first sight, otherwise check the password.
    ///
    /// Hashing and verification run on the blocking pool with no lock held.
    /// If the user was registered by another request in the meantime, the
    /// password is checked against that hash once the guard is dropped.
    pub async fn register_or_login(
        &self,
        username: &str,
        password: &str,
    ) -> StoreResult<LoginOutcome> {
        let existing = self.inner.read().await.users.get(username).cloned();

        if let Some(stored) = existing {
            return Self::check_password(username, password, &stored).await;
        }

        let hash = hash_password(password).await?;

        let raced = {
            let mut inner = self.inner.write().await;
            match inner.users.entry(username.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(hash);
                    None
                }
                Entry::Occupied(slot) => Some(slot.get().clone()),
            }
        };

        match raced {
            None => {
                info!("Registered {} user!", username);
                Ok(LoginOutcome::Registered)
            }
            Some(stored) => Self::check_password(username, password, &stored).await,
        }
    }

    async fn check_password(
        username: &str,
        password: &str,
        stored: &str,
    ) -> StoreResult<LoginOutcome> {
        if verify_password(password, stored).await? {
            info!("User {} logging in!", username);
            Ok(LoginOutcome::LoggedIn)
        } else {
            Err(StoreError::invalid_credentials(username))
        }
    }

    /// Store a freshly created room and return its id
    pub async fn insert_room(&self, room: Room) -> Uuid {
        let id = room.id;
        let mut inner = self.inner.write().await;
        inner.rooms.insert(id, room);
        info!("Storing new poll with id: {}", id);
        id
    }

    /// Snapshot of a room. An expired room gets its summary computed and
    /// persisted on first read.
    pub async fn room_snapshot(&self, poll_id: Uuid, now: DateTime<Utc>) -> StoreResult<Room> {
        {
            let inner = self.inner.read().await;
            let room = inner
                .rooms
                .get(&poll_id)
                .ok_or_else(|| StoreError::room_not_found(poll_id))?;

            if room.summary.is_some() || !room.has_ended_at(now) {
                return Ok(room.clone());
            }
        }

        let mut inner = self.inner.write().await;
        let room = inner
            .rooms
            .get_mut(&poll_id)
            .ok_or_else(|| StoreError::room_not_found(poll_id))?;

        if room.summarize_if_ended(now) {
            info!("Computed summary for ended poll {}", poll_id);
        }

        Ok(room.clone())
    }

    /// Validate and record a ballot. Checks and insertion share one write
    /// lock, so a user can never get two ballots into the same room.
    pub async fn cast_vote(
        &self,
        poll_id: Uuid,
        username: &str,
        positions: &HashMap<String, u32>,
        now: DateTime<Utc>,
    ) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        let room = inner
            .rooms
            .get_mut(&poll_id)
            .ok_or_else(|| StoreError::room_not_found(poll_id))?;

        if room.has_voted(username) {
            return Err(CoreError::already_voted(username).into());
        }

        if room.has_ended_at(now) {
            return Err(CoreError::poll_closed(poll_id).into());
        }

        let vote = build_vote(username, &room.options, positions)?;
        room.add_vote(vote, now)?;

        debug!(
            "User {} voted in poll {} ({} votes)",
            username,
            poll_id,
            room.votes.len()
        );
        Ok(())
    }

    /// Number of registered users and stored rooms
    pub async fn counts(&self) -> (usize, usize) {
        let inner = self.inner.read().await;
        (inner.users.len(), inner.rooms.len())
    }
}
