//! Presentation layer for survey-chatbot
//!
//! This crate contains the CLI definition, the interactive prompt,
//! console output, and the HTTP front end.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplInput};
pub use cli::commands::{Cli, RunMode};
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ThinkingSpinner;
pub use server::{ChatServerState, app_router};
