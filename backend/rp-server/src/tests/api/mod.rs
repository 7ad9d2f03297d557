mod error;
mod json_body;
