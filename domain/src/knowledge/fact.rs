//! Direct-answer rules

use crate::question::SanitizedQuestion;
use crate::question::sanitize::sanitize;

/// A fixed answer returned whenever one of its triggers appears in a question (Value Object)
///
/// Triggers go through the same sanitizer as questions and are stored
/// lower-cased, so a trigger such as "apple tv+" is kept as "apple tv" and
/// still matches the sanitized question text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeFact {
    id: String,
    triggers: Vec<String>,
    answer: String,
}

impl KnowledgeFact {
    pub fn new<I, S>(id: impl Into<String>, triggers: I, answer: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            id: id.into(),
            triggers: triggers
                .into_iter()
                .map(|t| sanitize(t.as_ref()).to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            answer: answer.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Check a lower-cased question against the triggers.
    ///
    /// A fact with no triggers never matches.
    pub fn matches(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| lowered.contains(t.as_str()))
    }
}

/// Ordered set of direct answers.
///
/// Read-only once built. Entries are tested in declaration order and the
/// first match is returned, even when a later entry would match more of
/// the question.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTable {
    facts: Vec<KnowledgeFact>,
}

impl KnowledgeTable {
    pub fn new(facts: Vec<KnowledgeFact>) -> Self {
        Self { facts }
    }

    /// Table with `extra` appended after the existing entries, so existing
    /// entries keep priority.
    pub fn with_additional(mut self, extra: impl IntoIterator<Item = KnowledgeFact>) -> Self {
        self.facts.extend(extra);
        self
    }

    /// Find the first fact triggered by the question
    pub fn lookup(&self, question: &SanitizedQuestion) -> Option<&KnowledgeFact> {
        let lowered = question.to_lowercase();
        self.facts.iter().find(|fact| fact.matches(&lowered))
    }

    pub fn facts(&self) -> &[KnowledgeFact] {
        &self.facts
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
