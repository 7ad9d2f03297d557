//! Startup bootstrap for rank-poll clients.
//!
//! Reads the persisted user record from local storage, turns it into
//! [`StartupFlags`] and hands control to the application exactly once.
//! A corrupt record never stops startup: it is reported to the
//! [`DiagnosticSink`] and the application starts with no user.

mod application;
mod diagnostics;
mod environment;
mod error;
mod parse_outcome;
mod startup_flags;
mod startup_loader;
pub mod storage;

#[cfg(test)]
mod tests;

pub use application::Application;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use environment::Environment;
pub use error::{Result as StartupResult, StartupError};
pub use parse_outcome::ParseOutcome;
pub use startup_flags::{InitConfig, StartupFlags};
pub use startup_loader::StartupLoader;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};

/// Storage key holding the serialized user record
pub const USER_STORAGE_KEY: &str = "user";

/// Mount point the application attaches to
pub const DEFAULT_MOUNT_ID: &str = "app";

/// Diagnostic message emitted when the stored user is not valid JSON
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse user from local storage!";

/// Diagnostic message emitted when the storage itself cannot be read
pub const READ_FAILURE_MESSAGE: &str = "Failed to read user from local storage!";
