//! Application layer for survey-chatbot
//!
//! This crate contains the response router, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, GenerationParams};
pub use ports::{
    conversation_logger::{
        ConversationEvent, ConversationLogger, NoConversationLogger, RouteRecord,
    },
    llm_gateway::{GatewayError, LlmGateway, LlmSession, ModelReply},
};
pub use use_cases::render_error::{ErrorRenderer, classify_and_render};
pub use use_cases::route_question::{
    CONTEXT_REMINDER, ResponseRouter, RouteOutcome, RouterSettings,
};
