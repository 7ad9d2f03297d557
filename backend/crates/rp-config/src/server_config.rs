use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_SHUTDOWN_GRACE_SECS,
    MAX_SHUTDOWN_GRACE_SECS, MIN_PORT, MIN_SHUTDOWN_GRACE_SECS,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Time in-flight requests get to finish after a shutdown signal
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if !(MIN_SHUTDOWN_GRACE_SECS..=MAX_SHUTDOWN_GRACE_SECS).contains(&self.shutdown_grace_secs)
        {
            return Err(ConfigError::server(format!(
                "server.shutdown_grace_secs must be {}-{}, got {}",
                MIN_SHUTDOWN_GRACE_SECS, MAX_SHUTDOWN_GRACE_SECS, self.shutdown_grace_secs
            )));
        }

        Ok(())
    }

    /// Apply a legacy `host:port` address such as `:8080` or `0.0.0.0:8080`.
    ///
    /// An empty host binds every interface. Malformed values are ignored.
    pub(crate) fn apply_address(&mut self, address: &str) {
        let Some((host, port)) = address.rsplit_once(':') else {
            return;
        };
        let Ok(port) = port.parse::<u16>() else {
            return;
        };

        self.host = if host.is_empty() {
            String::from("0.0.0.0")
        } else {
            host.trim_start_matches('[').trim_end_matches(']').to_string()
        };
        self.port = port;
    }
}
