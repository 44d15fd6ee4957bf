//! Survey knowledge.
//!
//! - [`survey::SurveyDataset`]: the respondent profile and its seed context
//! - [`fact::KnowledgeTable`]: ordered direct answers, first match wins

pub mod fact;
pub mod survey;
