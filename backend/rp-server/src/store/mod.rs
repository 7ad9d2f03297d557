pub mod error;
pub mod password;
pub mod poll_store;
