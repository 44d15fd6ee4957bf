//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod knowledge;
mod logging;
mod model;
mod repl;
mod server;

pub use knowledge::{FileFactConfig, FileKnowledgeConfig};
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use repl::FileReplConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("model.name cannot be empty")]
    EmptyModelName,

    #[error("model.temperature must be within 0.0..=2.0, got {0}")]
    InvalidTemperature(f32),

    #[error("model.top_p must be within 0.0..=1.0, got {0}")]
    InvalidTopP(f32),

    #[error("model.top_k cannot be 0")]
    InvalidTopK,

    #[error("model.max_output_tokens cannot be 0")]
    InvalidMaxOutputTokens,

    #[error("model.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("bind address is not a socket address: {0}")]
    InvalidBindAddress(String),

    #[error("knowledge fact '{0}' has no triggers")]
    FactWithoutTriggers(String),

    #[error("knowledge fact '{0}' has an empty answer")]
    FactWithoutAnswer(String),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model and generation settings
    pub model: FileModelConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
    /// Extra direct answers
    pub knowledge: FileKnowledgeConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    ///
    /// The server address is not checked here; it only matters when serving
    /// (see [`FileServerConfig::resolve_bind`]).
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.model.validate();
        issues.extend(self.knowledge.validate());
        issues
    }
}
