//! Configuration file loading for survey-chatbot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SURVEY_CHATBOT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./survey-chatbot.toml` or `./.survey-chatbot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/survey-chatbot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFactConfig, FileKnowledgeConfig, FileLoggingConfig,
    FileModelConfig, FileReplConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
