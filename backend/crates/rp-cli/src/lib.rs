//! rp-cli library
//!
//! Exports the HTTP client and the terminal application for use in tests
//! and by the `rp` binary.

pub mod app;
pub mod cli;
pub(crate) mod client;
pub(crate) mod commands;
pub mod console;
pub mod error;
pub mod logger;
pub(crate) mod poll_commands;
pub(crate) mod rank_arg;
pub(crate) mod user_commands;

#[cfg(test)]
mod tests;

pub use app::RpApp;
pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError};
pub use console::{Console, TerminalEnvironment};
pub use error::{CliError, Result as CliResult};
