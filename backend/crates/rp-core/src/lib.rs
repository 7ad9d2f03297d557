pub mod ballot;
pub mod error;
pub mod models;
pub mod tally;

#[cfg(test)]
mod tests;

pub use ballot::build_vote;
pub use error::{CoreError, INVALID_OPTION_COUNT, Result};
pub use models::poll_summary::PollSummary;
pub use models::rank::Rank;
pub use models::room::Room;
pub use models::room_dto::RoomDto;
pub use models::vote::Vote;
pub use tally::compute_summary;

/// Smallest number of options a poll can be created with
pub const MIN_POLL_OPTIONS: usize = 2;
