//! Error types for the Analyzer

use thiserror::Error;

/// User-facing message for any backend failure
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to get analysis from AI. Please check your API key and network connection.";

/// Errors that can occur during analysis
///
/// A reply in the wrong format is not an error: it surfaces as
/// `AnalysisReport { result: None, .. }`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    /// Backend call failed (network, HTTP status, timeout, bad body).
    /// The underlying cause is logged, not carried.
    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    AnalysisFailed,

    /// Text exceeds maximum length
    #[error("Text too long: {0} chars (max: {1})")]
    TextTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
