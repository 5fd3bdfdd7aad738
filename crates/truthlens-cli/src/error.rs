//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Shown when the model ignores the requested reply format.
pub const UNEXPECTED_FORMAT_MESSAGE: &str =
    "The AI returned an unexpected response format. Please try rephrasing your text.";

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing or unusable credential
    #[error(transparent)]
    Credential(#[from] truthlens_llm::CredentialError),

    /// Backend setup error
    #[error("Backend error: {0}")]
    Llm(#[from] truthlens_llm::LlmError),

    /// Analysis error
    #[error(transparent)]
    Analyzer(#[from] truthlens_analyzer::AnalyzerError),

    /// Reply could not be parsed into a verdict
    #[error("{}", UNEXPECTED_FORMAT_MESSAGE)]
    UnexpectedFormat,

    /// Analysis lifecycle misuse
    #[error("{0}")]
    State(#[from] truthlens_domain::StateError),

    /// Line editor error
    #[error("Line editor error: {0}")]
    Readline(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("{0}")]
    InvalidInput(String),

    /// Operation not permitted
    #[error("Operation not permitted: {0}")]
    NotPermitted(String),
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(e: rustyline::error::ReadlineError) -> Self {
        CliError::Readline(e.to_string())
    }
}
