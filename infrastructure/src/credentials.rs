//! Model API credential.

use thiserror::Error;

/// Environment variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),
}

/// API key with a redacted `Debug` so it never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Read the key from the process environment.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through `lookup`; blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(API_KEY_VAR) {
            Some(key) if !key.trim().is_empty() => Ok(Self(key.trim().to_string())),
            _ => Err(CredentialError::Missing(API_KEY_VAR)),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_lookup() {
        let key = ApiKey::from_lookup(|name| {
            assert_eq!(name, "GEMINI_API_KEY");
            Some(" abc123 ".to_string())
        })
        .unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn test_missing_key() {
        let err = ApiKey::from_lookup(|_| None).unwrap_err();
        assert_eq!(err.to_string(), "GEMINI_API_KEY environment variable is not set");
    }

    #[test]
    fn test_blank_key_is_missing() {
        assert!(ApiKey::from_lookup(|_| Some("   ".to_string())).is_err());
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = ApiKey::new("super-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
