//! Backend credential loading
//!
//! The API key is a required startup precondition. Loading reports a typed
//! error instead of aborting, so the binary decides how to surface it.

use thiserror::Error;

/// Preferred environment variable for the API key
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Fallback environment variable
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Credential loading errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    /// Neither variable is set to a non-empty value
    #[error("API key not set: export GEMINI_API_KEY (or API_KEY)")]
    Missing,
}

/// Process-wide API key for the generation backend
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap an explicit key
    pub fn new(key: impl Into<String>) -> Result<Self, CredentialError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(CredentialError::Missing);
        }
        Ok(Self(key.trim().to_string()))
    }

    /// Read the key from the process environment
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve the key through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(&str) -> Option<String>,
    {
        [API_KEY_VAR, FALLBACK_API_KEY_VAR]
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map_or(Err(CredentialError::Missing), Self::new)
    }

    /// Raw key, for request headers only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
