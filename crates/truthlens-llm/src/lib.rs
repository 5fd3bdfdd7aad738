//! TruthLens Generation Backend Layer
//!
//! Implementations of the `GenerationBackend` trait from `truthlens-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Gemini `generateContent` with Google Search grounding
//!
//! # Examples
//!
//! ```
//! use truthlens_llm::MockProvider;
//! use truthlens_domain::traits::GenerationBackend;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let rt = tokio::runtime::Runtime::new().unwrap();
//! let generation = rt.block_on(provider.generate_grounded("test prompt")).unwrap();
//! assert_eq!(generation.text, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod credentials;
pub mod gemini;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use truthlens_domain::traits::{Generation, GenerationBackend};
use truthlens_domain::GroundingSource;

pub use credentials::{ApiKey, CredentialError};
pub use gemini::{GeminiConfig, GeminiProvider};

/// Errors that can occur talking to the generation backend
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Backend rejected the credential
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Invalid response from the backend
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock backend for deterministic testing
///
/// Returns pre-configured replies and citations without any network calls.
///
/// # Examples
///
/// ```
/// use truthlens_llm::MockProvider;
/// use truthlens_domain::GroundingSource;
///
/// let provider = MockProvider::new("```json\n{}\n```")
///     .with_sources(vec![GroundingSource::web("https://a.example", "A")]);
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    default_sources: Vec<GroundingSource>,
    responses: Arc<Mutex<HashMap<String, Option<String>>>>,
    call_count: Arc<Mutex<usize>>,
    model: String,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed reply for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            default_sources: Vec::new(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            model: "mock".to_string(),
        }
    }

    /// Attach citations returned with every reply
    pub fn with_sources(mut self, sources: Vec<GroundingSource>) -> Self {
        self.default_sources = sources;
        self
    }

    /// Add a specific reply for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), Some(response.into()));
    }

    /// Configure to fail for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses.lock().unwrap().insert(prompt.into(), None);
    }

    /// Get the number of times the backend was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }

    fn respond(&self, prompt: &str) -> Result<Generation, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let text = match self.responses.lock().unwrap().get(prompt) {
            Some(Some(response)) => response.clone(),
            Some(None) => return Err(LlmError::Other("Mock error".to_string())),
            None => self.default_response.clone(),
        };

        Ok(Generation {
            text,
            sources: self.default_sources.clone(),
        })
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerationBackend for MockProvider {
    type Error = LlmError;

    async fn generate_grounded(&self, prompt: &str) -> Result<Generation, Self::Error> {
        self.respond(prompt)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
