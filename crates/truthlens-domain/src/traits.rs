//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::source::GroundingSource;
use std::future::Future;

/// Raw output of a grounded generation call
///
/// `text` is untrusted free text that may or may not follow the requested
/// format. `sources` come from backend metadata, independent of `text`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    /// Model reply body
    pub text: String,

    /// Citations, in backend order
    pub sources: Vec<GroundingSource>,
}

impl Generation {
    /// Reply with no citations
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sources: Vec::new(),
        }
    }
}

/// Trait for a remote text-generation backend with web-search grounding
///
/// Implemented by the infrastructure layer (truthlens-llm)
pub trait GenerationBackend {
    /// Error type for backend operations
    type Error;

    /// Generate a reply to `prompt` with search grounding enabled.
    ///
    /// Awaited in full; no partial output is exposed.
    fn generate_grounded(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<Generation, Self::Error>> + Send;

    /// Model identifier, for logs and report metadata
    fn model_name(&self) -> &str;
}
