//! HTTP server configuration from TOML (`[server]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address the HTTP front end listens on
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8080".to_string(),
        }
    }
}

impl FileServerConfig {
    /// Address to listen on: `override_addr` (from `--bind`) when given,
    /// otherwise `server.bind`.
    ///
    /// Only checked when serving, so other run modes never fail on it.
    pub fn resolve_bind(
        &self,
        override_addr: Option<&str>,
    ) -> Result<SocketAddr, ConfigValidationError> {
        let bind = override_addr.unwrap_or(&self.bind).trim();
        bind.parse()
            .map_err(|_| ConfigValidationError::InvalidBindAddress(bind.to_string()))
    }
}
