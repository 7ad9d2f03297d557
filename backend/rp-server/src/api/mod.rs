pub mod error;
pub mod extractors;
pub mod message_response;
pub mod polls;
pub mod users;
pub mod votes;
