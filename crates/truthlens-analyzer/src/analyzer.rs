//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::{extract_sources, extract_verdict, Extraction};
use crate::prompt::PromptBuilder;
use crate::types::AnalysisRequest;
use std::time::Instant;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};
use truthlens_domain::traits::GenerationBackend;
use truthlens_domain::AnalysisReport;

/// The Analyzer fact-checks text through a grounded generation backend
///
/// Each call builds its own prompt and gets its own response; nothing is
/// cached or shared between calls.
pub struct Analyzer<B>
where
    B: GenerationBackend,
{
    backend: B,
    config: AnalyzerConfig,
}

impl<B> Analyzer<B>
where
    B: GenerationBackend + Sync,
    B::Error: std::fmt::Display,
{
    /// Create a new Analyzer
    ///
    /// # Errors
    ///
    /// Returns `AnalyzerError::Config` if `config` fails validation.
    pub fn new(backend: B, config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        config.validate().map_err(AnalyzerError::Config)?;
        Ok(Self { backend, config })
    }

    /// Active configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Analyze text for misinformation
    ///
    /// A reply that ignores the requested format yields
    /// `AnalysisReport { result: None, .. }`. Only backend failures and
    /// oversized input are errors.
    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisReport, AnalyzerError> {
        let text_len = request.char_len();
        if text_len > self.config.max_text_length {
            return Err(AnalyzerError::TextTooLong(
                text_len,
                self.config.max_text_length,
            ));
        }

        info!(
            "Starting analysis with model '{}', text length {}",
            self.backend.model_name(),
            text_len
        );
        let start = Instant::now();

        let prompt = PromptBuilder::new(request.text).build();
        debug!("Prompt length: {} chars", prompt.len());

        let generation = match timeout(
            self.config.analysis_timeout(),
            self.backend.generate_grounded(&prompt),
        )
        .await
        {
            Ok(Ok(generation)) => generation,
            Ok(Err(e)) => {
                error!("Error analyzing text: {}", e);
                return Err(AnalyzerError::AnalysisFailed);
            }
            Err(_) => {
                error!(
                    "Analysis timed out after {}s",
                    self.config.analysis_timeout_secs
                );
                return Err(AnalyzerError::AnalysisFailed);
            }
        };

        debug!("Response length: {} chars", generation.text.len());

        let sources = extract_sources(&generation);
        let result = match extract_verdict(&generation.text, self.config.schema_policy) {
            Extraction::Parsed(result) => Some(result),
            Extraction::Unparsed(reason) => {
                warn!("Model reply violated the requested format: {}", reason);
                None
            }
        };

        info!(
            "Analysis complete in {}ms: verdict {}, {} source(s)",
            start.elapsed().as_millis(),
            result
                .as_ref()
                .map(|r| r.verdict.as_str())
                .unwrap_or("none"),
            sources.len()
        );

        Ok(AnalysisReport { result, sources })
    }
}
