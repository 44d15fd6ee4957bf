//! Advisory question categories.

use super::SanitizedQuestion;
use serde::{Deserialize, Serialize};

/// Topic label attached to a question for observability.
///
/// Never used to decide how a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Demographics,
    Financial,
    Health,
    Entertainment,
    Employment,
}

/// Keyword lists in scan order. The first category with a hit wins.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Demographics,
        &["age", "gender", "race", "ethnicity", "location"],
    ),
    (Category::Financial, &["income", "salary", "revenue", "assets"]),
    (Category::Health, &["medical", "health", "condition", "disease"]),
    (Category::Entertainment, &["tv", "movie", "game", "streaming"]),
    (Category::Employment, &["job", "work", "company", "industry"]),
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Demographics => "demographics",
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Employment => "employment",
        }
    }

    /// All categories in scan order
    pub fn all() -> impl Iterator<Item = Category> {
        CATEGORY_KEYWORDS.iter().map(|(category, _)| *category)
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label a question by substring keyword matching.
///
/// Matching is plain substring containment on the lower-cased text, so
/// "age" also hits "average" or "message".
pub fn categorize(question: &SanitizedQuestion) -> Option<Category> {
    let lower = question.to_lowercase();
    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::sanitize::sanitize;

    #[test]
    fn test_demographic_question() {
        assert_eq!(
            categorize(&sanitize("What is the race distribution?")),
            Some(Category::Demographics)
        );
    }

    #[test]
    fn test_financial_question() {
        assert_eq!(
            categorize(&sanitize("What is the income level?")),
            Some(Category::Financial)
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            categorize(&sanitize("Which STREAMING services?")),
            Some(Category::Entertainment)
        );
    }

    #[test]
    fn test_declaration_order_breaks_ties() {
        let question = sanitize("Does income affect health?");
        assert_eq!(categorize(&question), Some(Category::Financial));
    }

    #[test]
    fn test_substring_semantics() {
        // "average" contains "age"
        assert_eq!(
            categorize(&sanitize("What is the average salary?")),
            Some(Category::Demographics)
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(categorize(&sanitize("Do they own a car?")), None);
    }

    #[test]
    fn test_deterministic() {
        let question = sanitize("Which company do they work for?");
        let first = categorize(&question);
        for _ in 0..10 {
            assert_eq!(categorize(&question), first);
        }
        assert_eq!(first, Some(Category::Employment));
    }

    #[test]
    fn test_keywords_lookup() {
        assert!(Category::Health.keywords().contains(&"disease"));
        assert_eq!(Category::all().count(), 5);
        assert_eq!(Category::all().next(), Some(Category::Demographics));
    }
}
