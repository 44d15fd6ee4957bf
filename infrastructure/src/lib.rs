//! Infrastructure layer for survey-chatbot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod credentials;
pub mod gemini;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFactConfig, FileKnowledgeConfig,
    FileLoggingConfig, FileModelConfig, FileReplConfig, FileServerConfig,
};
pub use credentials::{API_KEY_VAR, ApiKey, CredentialError};
pub use gemini::{error::GeminiError, gateway::GeminiLlmGateway, session::GeminiSession};
pub use logging::JsonlConversationLogger;
