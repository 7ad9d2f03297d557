use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL, DEFAULT_STORAGE_FILE};

use std::path::Path;

use serde::Deserialize;

/// Settings used by the `rp` command line client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    /// Local storage file, relative to the config directory
    pub storage_file: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            storage_file: String::from(DEFAULT_STORAGE_FILE),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::client(format!(
                "client.server_url must start with http:// or https://, got {}",
                self.server_url
            )));
        }

        if self.storage_file.is_empty()
            || Path::new(&self.storage_file).is_absolute()
            || self.storage_file.contains("..")
        {
            return Err(ConfigError::client(
                "client.storage_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
