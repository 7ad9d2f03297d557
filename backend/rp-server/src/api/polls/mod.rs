pub mod create_poll_request;
pub mod create_poll_response;
pub mod polls;
