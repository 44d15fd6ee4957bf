//! Fixed user-facing texts.
//!
//! These are the only strings the pipeline produces on its own; everything
//! else returned to a user is either a direct answer or model output.

/// Returned when a question fails validation.
pub const REPHRASE_REQUEST: &str =
    "I'm sorry, but I couldn't understand your question. Could you please rephrase it?";

/// Returned when the model answers with no text.
pub const EMPTY_RESPONSE: &str =
    "I apologize, but I couldn't generate a response. Please try asking your question differently.";

/// Rendering of [`ChatbotError::Api`](super::error::ChatbotError::Api).
pub const API_FAILURE: &str =
    "I'm having trouble connecting to my knowledge base. Please try again in a moment.";

/// Rendering of [`ChatbotError::Validation`](super::error::ChatbotError::Validation).
pub const VALIDATION_FAILURE: &str =
    "I couldn't understand that question. Could you please rephrase it?";

/// Rendering of [`ChatbotError::Unknown`](super::error::ChatbotError::Unknown).
pub const UNKNOWN_FAILURE: &str =
    "I encountered an unexpected error. Please try again or contact support.";
