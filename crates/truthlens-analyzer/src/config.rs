//! Configuration for the Analyzer

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How strictly the model's JSON is checked against the verdict schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaPolicy {
    /// Reject unknown verdicts, non-integer or out-of-range scores, and type mismatches
    #[default]
    Strict,
    /// Round and clamp scores into [0, 100]; unknown verdicts are still rejected
    Lenient,
}

/// Configuration for the Analyzer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum input text length (characters)
    pub max_text_length: usize,

    /// Maximum time for a single backend call (seconds)
    pub analysis_timeout_secs: u64,

    /// Schema check applied to the parsed verdict
    pub schema_policy: SchemaPolicy,
}

impl AnalyzerConfig {
    /// Get the analysis timeout as a Duration
    pub fn analysis_timeout(&self) -> Duration {
        Duration::from_secs(self.analysis_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_text_length == 0 {
            return Err("max_text_length must be greater than 0".to_string());
        }
        if self.analysis_timeout_secs == 0 {
            return Err("analysis_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Lenient preset: longer timeout, larger inputs, clamped scores
    pub fn lenient() -> Self {
        Self {
            max_text_length: 100_000,
            analysis_timeout_secs: 120,
            schema_policy: SchemaPolicy::Lenient,
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_text_length: 50_000,
            analysis_timeout_secs: 60,
            schema_policy: SchemaPolicy::Strict,
        }
    }
}
