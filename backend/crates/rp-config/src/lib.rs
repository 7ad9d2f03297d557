mod client_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod poll_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use poll_config::PollConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "RP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".rp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 3;
const MIN_SHUTDOWN_GRACE_SECS: u64 = 1;
const MAX_SHUTDOWN_GRACE_SECS: u64 = 60;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MAX_OPTIONS: usize = 32;
const MIN_MAX_OPTIONS: usize = 2;
const MAX_MAX_OPTIONS: usize = 256;
const DEFAULT_MAX_TITLE_LENGTH: usize = 200;
const DEFAULT_POLL_DURATION_SECS: u64 = 24 * 60 * 60;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_STORAGE_FILE: &str = "local_storage.json";
