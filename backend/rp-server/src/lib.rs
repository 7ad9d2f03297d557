pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod store;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::json_body::JsonBody,
    message_response::MessageResponse,
    polls::{
        create_poll_request::CreatePollRequest,
        create_poll_response::CreatePollResponse,
        polls::{create_poll, get_poll},
    },
    users::{create_or_login_request::CreateOrLoginRequest, users::create_or_login_user},
    votes::{vote_request::VoteRequest, votes::vote_in_poll},
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use shutdown::ShutdownCoordinator;
pub use store::{
    error::{Result as StoreResult, StoreError},
    poll_store::{LoginOutcome, PollStore},
};
