pub mod vote_request;
pub mod votes;
