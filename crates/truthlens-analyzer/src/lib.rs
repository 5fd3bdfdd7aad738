//! TruthLens Analyzer
//!
//! Turns free text into a misinformation verdict using a search-grounded LLM.
//!
//! # Overview
//!
//! The analyzer wraps the user's text in a fixed fact-checking prompt, sends
//! it to a `GenerationBackend`, and pulls a typed verdict out of the
//! ```` ```json ```` fenced block in the reply. Citations come separately,
//! from backend metadata.
//!
//! # Architecture
//!
//! ```text
//! Text → PromptBuilder → Backend (search grounding) → Extractor → AnalysisReport
//! ```
//!
//! # Key Features
//!
//! - **Deterministic Prompting**: the same text always renders the same prompt
//! - **Tolerant Extraction**: a malformed reply yields `result: None`, not an error
//! - **Schema Hardening**: unknown verdicts and bad scores never reach callers
//! - **Single Failure Bucket**: every transport problem surfaces as `AnalysisFailed`
//!
//! # Example Usage
//!
//! ```no_run
//! use truthlens_analyzer::{Analyzer, AnalyzerConfig, AnalysisRequest};
//! use truthlens_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(
//!     "```json\n{\"verdict\":\"MISLEADING\",\"confidenceScore\":73,\"explanation\":\"...\"}\n```",
//! );
//! let analyzer = Analyzer::new(llm, AnalyzerConfig::default())?;
//!
//! let report = analyzer
//!     .analyze(AnalysisRequest::new("The moon is made of cheese."))
//!     .await?;
//!
//! match report.result {
//!     Some(result) => println!("{} ({})", result.verdict, result.confidence_score),
//!     None => println!("Unexpected response format"),
//! }
//! println!("Sources: {}", report.sources.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod config;
mod error;
pub mod parser;
pub mod prompt;
mod types;


pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, SchemaPolicy};
pub use error::AnalyzerError;
pub use parser::{extract_sources, extract_verdict, Extraction, UnparsedReason};
pub use prompt::PromptBuilder;
pub use types::AnalysisRequest;
