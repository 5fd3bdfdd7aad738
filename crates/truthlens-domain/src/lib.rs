//! TruthLens Domain Layer
//!
//! This crate contains the core vocabulary of a fact-check: verdict labels,
//! confidence scores, grounding citations and the analysis lifecycle.
//! It depends only on `serde`, because the JSON shape of a verdict is part of
//! the contract with the model backend.
//!
//! ## Key Concepts
//!
//! - **Verdict**: one of five closed labels describing a fact-check outcome
//! - **Confidence Score**: integer certainty in [0, 100]
//! - **Grounding Source**: a citation the backend supplies out-of-band
//! - **Analysis State**: Idle → Loading → Succeeded | Failed
//! - **Education**: static tips and a short quiz
//!
//! ## Architecture
//!
//! - Pure data and state transitions only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod confidence;
pub mod education;
pub mod source;
pub mod state;
pub mod traits;
pub mod verdict;

// Re-exports for convenience
pub use analysis::{AnalysisReport, AnalysisResult};
pub use confidence::{ConfidenceError, ConfidenceScore};
pub use education::{AnswerFeedback, EducationalTip, Quiz, QuizError, QuizQuestion};
pub use source::{GroundingSource, WebSource};
pub use state::{AnalysisState, StateError};
pub use verdict::Verdict;
