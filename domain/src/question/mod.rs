//! Question handling.
//!
//! - [`sanitize::sanitize`]: character filtering and whitespace folding
//! - [`validation::check_question`]: length bounds
//! - [`category::categorize`]: advisory topic label

pub mod category;
pub mod sanitize;
pub mod validation;

/// A question after character filtering and whitespace normalization (Value Object)
///
/// Only [`sanitize::sanitize`] constructs this type, so holding one means
/// the text has already been cleaned. It is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedQuestion {
    content: String,
}

impl SanitizedQuestion {
    pub(crate) fn new(content: String) -> Self {
        Self { content }
    }

    /// Get the question content
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Length in characters, as used by the validator
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Lower-cased copy used for keyword matching
    pub fn to_lowercase(&self) -> String {
        self.content.to_lowercase()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl AsRef<str> for SanitizedQuestion {
    fn as_ref(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for SanitizedQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
