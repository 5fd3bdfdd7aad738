//! Analyzer construction for the active profile.

use crate::config::Config;
use crate::error::Result;
use truthlens_analyzer::Analyzer;
use truthlens_llm::{ApiKey, GeminiProvider};

/// Gemini-backed analyzer for the active profile, keyed from the environment.
pub fn build_analyzer(config: &Config) -> Result<Analyzer<GeminiProvider>> {
    build_analyzer_with(config, |name| std::env::var(name).ok())
}

/// Same as [`build_analyzer`], resolving the API key through `lookup`.
///
/// The key is checked first, so a missing key fails before the profile or
/// analyzer settings are looked at.
pub fn build_analyzer_with<F>(config: &Config, lookup: F) -> Result<Analyzer<GeminiProvider>>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = ApiKey::from_lookup(lookup)?;
    let profile = config.get_active_profile()?;
    let provider = GeminiProvider::new(profile.to_gemini_config(), api_key)?;
    Ok(Analyzer::new(provider, config.analyzer.clone())?)
}
