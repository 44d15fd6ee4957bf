//! Question validator

use super::SanitizedQuestion;
use thiserror::Error;

/// Shortest accepted question, in characters.
pub const MIN_QUESTION_CHARS: usize = 3;

/// Longest accepted question, in characters.
pub const MAX_QUESTION_CHARS: usize = 500;

/// Why a sanitized question was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionRejection {
    #[error("question is empty")]
    Empty,

    #[error("question is too short ({len} < {} characters)", MIN_QUESTION_CHARS)]
    TooShort { len: usize },

    #[error("question is too long ({len} > {} characters)", MAX_QUESTION_CHARS)]
    TooLong { len: usize },
}

/// Check a sanitized question against the length bounds.
///
/// Grammar, phrasing and content are not inspected.
pub fn check_question(question: &SanitizedQuestion) -> Result<(), QuestionRejection> {
    if question.is_empty() {
        return Err(QuestionRejection::Empty);
    }

    let len = question.char_len();
    if len < MIN_QUESTION_CHARS {
        return Err(QuestionRejection::TooShort { len });
    }
    if len > MAX_QUESTION_CHARS {
        return Err(QuestionRejection::TooLong { len });
    }

    Ok(())
}

pub fn is_valid_question(question: &SanitizedQuestion) -> bool {
    check_question(question).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::sanitize::sanitize;

    fn of_len(n: usize) -> SanitizedQuestion {
        sanitize(&"a".repeat(n))
    }

    #[test]
    fn test_valid_question() {
        assert!(is_valid_question(&sanitize("What is the household income?")));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(check_question(&sanitize("")), Err(QuestionRejection::Empty));
        assert_eq!(check_question(&sanitize("  @#$  ")), Err(QuestionRejection::Empty));
    }

    #[test]
    fn test_lower_bound() {
        assert_eq!(
            check_question(&sanitize("hi")),
            Err(QuestionRejection::TooShort { len: 2 })
        );
        assert!(is_valid_question(&of_len(3)));
    }

    #[test]
    fn test_upper_bound() {
        assert!(is_valid_question(&of_len(500)));
        assert_eq!(
            check_question(&of_len(501)),
            Err(QuestionRejection::TooLong { len: 501 })
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(is_valid_question(&sanitize("äöü")));
        assert!(is_valid_question(&sanitize(&"é".repeat(500))));
    }

    #[test]
    fn test_non_question_phrasing_accepted() {
        assert!(is_valid_question(&sanitize("tell me everything")));
    }
}
