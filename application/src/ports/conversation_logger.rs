//! Port for the structured conversation log.
//!
//! `tracing` carries the human-readable diagnostics; this port receives one
//! typed record per routed question so the log can be analysed offline.

use serde::Serialize;
use survey_domain::{Category, ErrorKind, Model};

/// What happened to a question, as recorded in the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum RouteRecord {
    Rejected,
    DirectAnswer { fact_id: String },
    Model { answer_bytes: usize },
    EmptyReply,
    Failed { error_kind: ErrorKind },
}

/// One conversation log record.
///
/// Serializes with a `type` tag (`question_routed`, `session_reset`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    QuestionRouted {
        category: Option<Category>,
        question_chars: usize,
        #[serde(flatten)]
        route: RouteRecord,
    },
    SessionReset {
        model: Model,
    },
}

impl ConversationEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ConversationEvent::QuestionRouted { .. } => "question_routed",
            ConversationEvent::SessionReset { .. } => "session_reset",
        }
    }
}

/// Port for logging conversation events.
///
/// `log` is synchronous and infallible; an adapter that cannot write drops
/// the event.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Used when no conversation log is configured.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
