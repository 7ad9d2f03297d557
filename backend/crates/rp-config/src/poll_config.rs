use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_OPTIONS, DEFAULT_MAX_TITLE_LENGTH,
    DEFAULT_POLL_DURATION_SECS, MAX_MAX_OPTIONS, MIN_MAX_OPTIONS,
};

use std::time::Duration;

use serde::Deserialize;

/// Limits applied when polls are created
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PollConfig {
    pub max_options: usize,
    pub max_title_length: usize,
    /// Used when a create request carries no duration
    pub default_duration_secs: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_options: DEFAULT_MAX_OPTIONS,
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            default_duration_secs: DEFAULT_POLL_DURATION_SECS,
        }
    }
}

impl PollConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_MAX_OPTIONS..=MAX_MAX_OPTIONS).contains(&self.max_options) {
            return Err(ConfigError::poll(format!(
                "poll.max_options must be {}-{}, got {}",
                MIN_MAX_OPTIONS, MAX_MAX_OPTIONS, self.max_options
            )));
        }

        if self.max_title_length == 0 {
            return Err(ConfigError::poll("poll.max_title_length must be > 0"));
        }

        if self.default_duration_secs == 0 {
            return Err(ConfigError::poll("poll.default_duration_secs must be > 0"));
        }

        Ok(())
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_secs(self.default_duration_secs)
    }
}
