//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: language models the chatbot can delegate to
//! - [`error::ChatbotError`]: the three-kind failure taxonomy
//! - [`messages`]: the fixed user-facing texts

pub mod error;
pub mod messages;
pub mod model;
