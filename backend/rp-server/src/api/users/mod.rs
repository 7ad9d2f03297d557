pub mod create_or_login_request;
pub mod users;
