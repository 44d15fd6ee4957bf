//! Gemini adapter
//!
//! Implements LlmGateway over the Gemini `generateContent` REST endpoint.
//! Only plain text turns are supported.

pub mod client;
pub mod error;
pub mod gateway;
pub mod session;
pub mod types;
