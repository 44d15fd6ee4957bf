//! Route Question use case.
//!
//! [`ResponseRouter`] turns raw user text into the final answer:
//!
//! 1. Sanitize and validate the text
//! 2. Answer from the [`KnowledgeTable`] when a trigger matches
//! 3. Otherwise delegate to the shared model session
//! 4. Render every failure through [`ErrorRenderer`]
//!
//! The router never fails towards its caller. Direct answers never touch the
//! model, so dataset-covered facts are stable no matter what the model does.

use crate::config::BehaviorConfig;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, RouteRecord,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession, ModelReply};
use crate::use_cases::render_error::ErrorRenderer;
use std::sync::Arc;
use survey_domain::{
    Category, ChatbotError, KnowledgeTable, Model, QuestionRejection, SanitizedQuestion,
    SurveyDataset, categorize, check_question, messages, sanitize,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Instruction prefixed to every question delegated to the model.
pub const CONTEXT_REMINDER: &str =
    "Remember to answer based on the survey data provided. Be direct and specific in your response.";

/// Context passed to the error renderer for per-request failures.
const REQUEST_CONTEXT: &str = "processing your question";

/// Settings for a [`ResponseRouter`].
#[derive(Debug, Clone)]
pub struct RouterSettings {
    /// Model the shared session talks to.
    pub model: Model,
    /// First turn of every session.
    pub seed_context: String,
    /// Direct answers, in priority order.
    pub knowledge: KnowledgeTable,
    /// Limits applied to model delegation.
    pub behavior: BehaviorConfig,
}

impl RouterSettings {
    /// Settings grounded on a survey dataset: its seed context and its
    /// built-in direct answers.
    pub fn for_dataset(dataset: &SurveyDataset, model: Model) -> Self {
        Self {
            model,
            seed_context: dataset.seed_context(),
            knowledge: dataset.knowledge_table(),
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_knowledge(mut self, knowledge: KnowledgeTable) -> Self {
        self.knowledge = knowledge;
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }
}

/// How a question was handled.
#[derive(Debug)]
pub enum RouteOutcome {
    /// The sanitized text failed validation.
    Rejected(QuestionRejection),
    /// A knowledge fact matched; the model was not consulted.
    DirectAnswer { fact_id: String, answer: String },
    /// The model answered; text is already trimmed.
    ModelAnswer(String),
    /// The model replied without text.
    EmptyReply,
    /// Delegation failed.
    Failed(ChatbotError),
}

impl RouteOutcome {
    /// Short label for logs
    pub fn route_name(&self) -> &'static str {
        match self {
            RouteOutcome::Rejected(_) => "rejected",
            RouteOutcome::DirectAnswer { .. } => "direct_answer",
            RouteOutcome::ModelAnswer(_) => "model",
            RouteOutcome::EmptyReply => "empty_reply",
            RouteOutcome::Failed(_) => "failed",
        }
    }

    /// Final user-facing text. Never empty.
    pub fn into_response(self) -> String {
        match self {
            RouteOutcome::Rejected(_) => messages::REPHRASE_REQUEST.to_string(),
            RouteOutcome::DirectAnswer { answer, .. } => answer,
            RouteOutcome::ModelAnswer(text) => text,
            RouteOutcome::EmptyReply => messages::EMPTY_RESPONSE.to_string(),
            RouteOutcome::Failed(err) => {
                ErrorRenderer::render(&err, Some(REQUEST_CONTEXT)).to_string()
            }
        }
    }
}

/// Question router owning the shared conversation session.
///
/// The session is behind an async mutex held for the whole model call, so
/// concurrent callers take turns instead of interleaving messages.
pub struct ResponseRouter {
    gateway: Arc<dyn LlmGateway>,
    settings: RouterSettings,
    session: Mutex<Box<dyn LlmSession>>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ResponseRouter {
    /// Start the seeded session and build the router.
    ///
    /// Any gateway failure here is an [`ChatbotError::Api`] and is meant to
    /// abort startup.
    pub async fn start(
        gateway: Arc<dyn LlmGateway>,
        settings: RouterSettings,
    ) -> Result<Self, ChatbotError> {
        info!("Starting model session with {}", settings.model);

        let session = Self::open_session(gateway.as_ref(), &settings).await?;

        info!(
            "Response router ready ({} direct answers)",
            settings.knowledge.len()
        );

        Ok(Self {
            gateway,
            settings,
            session: Mutex::new(session),
            conversation_logger: Arc::new(NoConversationLogger),
        })
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn model(&self) -> &Model {
        &self.settings.model
    }

    pub fn knowledge(&self) -> &KnowledgeTable {
        &self.settings.knowledge
    }

    /// Answer a question. Always returns non-empty text.
    pub async fn process_question(&self, raw: &str) -> String {
        self.route(raw).await.into_response()
    }

    /// Run the pipeline and report how the question was handled.
    pub async fn route(&self, raw: &str) -> RouteOutcome {
        debug!("Received question of length: {}", raw.chars().count());

        let question = sanitize(raw);
        let category = categorize(&question);
        debug!(
            "Question category: {}",
            category.map(|c| c.as_str()).unwrap_or("none")
        );

        let outcome = self.route_sanitized(&question).await;

        info!("Question routed via {}", outcome.route_name());
        self.log_outcome(&question, category, &outcome);
        outcome
    }

    async fn route_sanitized(&self, question: &SanitizedQuestion) -> RouteOutcome {
        if let Err(rejection) = check_question(question) {
            warn!("Rejected question: {}", rejection);
            return RouteOutcome::Rejected(rejection);
        }

        if let Some(fact) = self.settings.knowledge.lookup(question) {
            debug!("Direct answer '{}' matched", fact.id());
            return RouteOutcome::DirectAnswer {
                fact_id: fact.id().to_string(),
                answer: fact.answer().to_string(),
            };
        }

        match self.ask_model(question).await {
            Ok(ModelReply::Text(text)) if !text.trim().is_empty() => {
                RouteOutcome::ModelAnswer(text.trim().to_string())
            }
            Ok(_) => {
                warn!("Model returned an empty reply");
                RouteOutcome::EmptyReply
            }
            Err(err) => RouteOutcome::Failed(err),
        }
    }

    /// Send a question to the shared session, bypassing the knowledge table.
    ///
    /// Returns [`ChatbotError::Validation`] when the question would not pass
    /// validation.
    pub async fn ask_model(&self, question: &SanitizedQuestion) -> Result<ModelReply, ChatbotError> {
        check_question(question).map_err(|r| ChatbotError::Validation(r.to_string()))?;

        let prompt = format!("{} Question: {}", CONTEXT_REMINDER, question);

        let mut session = self.session.lock().await;
        let reply = match self.settings.behavior.timeout {
            Some(limit) => match tokio::time::timeout(limit, session.send(&prompt)).await {
                Ok(result) => result,
                Err(_) => {
                    warn!("Model call exceeded {:?}", limit);
                    Err(GatewayError::Timeout)
                }
            },
            None => session.send(&prompt).await,
        }?;

        debug!("Session now holds {} turns", session.turn_count());
        Ok(reply)
    }

    /// Replace the shared session with a freshly seeded one.
    pub async fn reset_session(&self) -> Result<(), ChatbotError> {
        let fresh = Self::open_session(self.gateway.as_ref(), &self.settings).await?;
        *self.session.lock().await = fresh;

        info!("Model session reset");
        self.conversation_logger.log(ConversationEvent::SessionReset {
            model: self.settings.model.clone(),
        });
        Ok(())
    }

    async fn open_session(
        gateway: &dyn LlmGateway,
        settings: &RouterSettings,
    ) -> Result<Box<dyn LlmSession>, ChatbotError> {
        gateway
            .start_session(&settings.model, &settings.seed_context)
            .await
            .map_err(|e| ChatbotError::Api(format!("Failed to initialize model session: {}", e)))
    }

    fn log_outcome(
        &self,
        question: &SanitizedQuestion,
        category: Option<Category>,
        outcome: &RouteOutcome,
    ) {
        let route = match outcome {
            RouteOutcome::Rejected(_) => RouteRecord::Rejected,
            RouteOutcome::DirectAnswer { fact_id, .. } => RouteRecord::DirectAnswer {
                fact_id: fact_id.clone(),
            },
            RouteOutcome::ModelAnswer(text) => RouteRecord::Model {
                answer_bytes: text.len(),
            },
            RouteOutcome::EmptyReply => RouteRecord::EmptyReply,
            RouteOutcome::Failed(err) => RouteRecord::Failed {
                error_kind: err.kind(),
            },
        };

        self.conversation_logger.log(ConversationEvent::QuestionRouted {
            category,
            question_chars: question.char_len(),
            route,
        });
    }
}
