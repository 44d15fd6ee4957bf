//! Input sanitizer

use super::SanitizedQuestion;

/// Punctuation kept by the sanitizer besides letters, digits and whitespace.
const KEPT_PUNCTUATION: [char; 4] = ['?', '.', '!', ','];

/// Clean raw user text.
///
/// Drops every character that is not alphanumeric, whitespace or one of
/// `? . ! ,`, then folds whitespace runs into single spaces and trims.
/// Total and idempotent. "Alphanumeric" is Unicode letters and digits
/// only, so `_` is dropped along with the other symbols.
pub fn sanitize(raw: &str) -> SanitizedQuestion {
    let filtered: String = raw.chars().filter(|c| is_kept(*c)).collect();
    let collapsed = filtered.split_whitespace().collect::<Vec<_>>().join(" ");
    SanitizedQuestion::new(collapsed)
}

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
}
