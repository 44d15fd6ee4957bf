//! Extra direct answers from TOML (`[[knowledge.facts]]`)
//!
//! ```toml
//! [[knowledge.facts]]
//! id = "housing"
//! triggers = ["housing", "homeowner"]
//! answer = "Based on the survey data, the respondent is a homeowner."
//! ```
//!
//! Configured facts are appended after the built-in ones. Triggers are
//! sanitized like questions; a fact whose triggers all sanitize to nothing
//! is reported by validation.

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use survey_domain::KnowledgeFact;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeConfig {
    pub facts: Vec<FileFactConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFactConfig {
    pub id: String,
    pub triggers: Vec<String>,
    pub answer: String,
}

impl FileKnowledgeConfig {
    pub fn to_facts(&self) -> Vec<KnowledgeFact> {
        self.facts
            .iter()
            .map(|f| KnowledgeFact::new(f.id.clone(), &f.triggers, f.answer.clone()))
            .collect()
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();
        for fact in &self.facts {
            let usable = KnowledgeFact::new(fact.id.as_str(), &fact.triggers, "");
            if usable.triggers().is_empty() {
                issues.push(ConfigValidationError::FactWithoutTriggers(fact.id.clone()));
            }
            if fact.answer.trim().is_empty() {
                issues.push(ConfigValidationError::FactWithoutAnswer(fact.id.clone()));
            }
        }
        issues
    }
}
