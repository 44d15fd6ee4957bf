//! Domain layer for survey-chatbot
//!
//! This crate contains the pure decision logic of the chatbot. It has no
//! dependencies on networking, configuration files or terminal concerns.
//!
//! # Core Concepts
//!
//! ## Questions
//!
//! Raw user text is turned into a [`SanitizedQuestion`] by [`sanitize`],
//! checked by [`check_question`], and labelled with an advisory
//! [`Category`] by [`categorize`]. The label is for observability only.
//!
//! ## Survey knowledge
//!
//! The respondent profile lives in [`SurveyDataset`]. It produces the seed
//! context given to the language model and the built-in entries of the
//! [`KnowledgeTable`], an ordered first-match set of direct answers.

pub mod core;
pub mod knowledge;
pub mod question;

// Re-export commonly used types
pub use core::{
    error::{ChatbotError, ErrorKind},
    messages,
    model::Model,
};
pub use knowledge::{
    fact::{KnowledgeFact, KnowledgeTable},
    survey::{SurveyDataset, SurveyField},
};
pub use question::{
    SanitizedQuestion,
    category::{Category, categorize},
    sanitize::sanitize,
    validation::{
        MAX_QUESTION_CHARS, MIN_QUESTION_CHARS, QuestionRejection, check_question,
        is_valid_question,
    },
};
