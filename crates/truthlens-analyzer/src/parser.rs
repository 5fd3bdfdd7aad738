//! Parse model replies into typed verdicts
//!
//! The reply is untrusted free text. Everything here is total: malformed
//! input produces `Extraction::Unparsed`, never an error or a panic.

use crate::config::SchemaPolicy;
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;
use truthlens_domain::traits::Generation;
use truthlens_domain::{AnalysisResult, ConfidenceScore, GroundingSource, Verdict};

lazy_static! {
    /// First ```json fenced block; the body is trimmed by the surrounding `\s*`
    static ref JSON_FENCE: Regex = Regex::new(r"```json\s*([\s\S]*?)\s*```")
        .expect("JSON_FENCE regex is valid");
}

/// Outcome of extracting a verdict from a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The reply honored the requested format
    Parsed(AnalysisResult),
    /// The reply violated it
    Unparsed(UnparsedReason),
}

/// Why a reply could not be turned into a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnparsedReason {
    /// No ```json block in the reply
    NoFencedBlock,
    /// The block is not valid JSON
    MalformedJson(String),
    /// Valid JSON that does not fit the verdict schema
    SchemaViolation(String),
}

impl std::fmt::Display for UnparsedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnparsedReason::NoFencedBlock => f.write_str("no ```json block in reply"),
            UnparsedReason::MalformedJson(e) => write!(f, "malformed JSON: {}", e),
            UnparsedReason::SchemaViolation(e) => write!(f, "schema violation: {}", e),
        }
    }
}

impl Extraction {
    /// Parsed result, dropping the failure reason
    pub fn into_result(self) -> Option<AnalysisResult> {
        match self {
            Extraction::Parsed(result) => Some(result),
            Extraction::Unparsed(_) => None,
        }
    }

    /// Whether a result was recovered
    pub fn is_parsed(&self) -> bool {
        matches!(self, Extraction::Parsed(_))
    }
}

/// Extract the verdict from a raw model reply
pub fn extract_verdict(response: &str, policy: SchemaPolicy) -> Extraction {
    let block = match find_json_block(response) {
        Some(block) => block,
        None => return Extraction::Unparsed(UnparsedReason::NoFencedBlock),
    };

    let json: Value = match serde_json::from_str(block) {
        Ok(json) => json,
        Err(e) => return Extraction::Unparsed(UnparsedReason::MalformedJson(e.to_string())),
    };

    match parse_result_json(&json, policy) {
        Ok(result) => Extraction::Parsed(result),
        Err(e) => Extraction::Unparsed(UnparsedReason::SchemaViolation(e)),
    }
}

/// Citations for a generation, in backend order
///
/// Taken from backend metadata only, never from the reply body.
pub fn extract_sources(generation: &Generation) -> Vec<GroundingSource> {
    generation.sources.clone()
}

/// Body of the first ```json block, if any
fn find_json_block(response: &str) -> Option<&str> {
    JSON_FENCE
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check a decoded JSON value against the verdict schema
fn parse_result_json(json: &Value, policy: SchemaPolicy) -> Result<AnalysisResult, String> {
    let obj = json
        .as_object()
        .ok_or_else(|| "Verdict is not a JSON object".to_string())?;

    let verdict_str = obj
        .get("verdict")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'verdict'".to_string())?;
    let verdict =
        Verdict::parse(verdict_str).ok_or_else(|| format!("Unknown verdict '{}'", verdict_str))?;

    let raw_score = obj
        .get("confidenceScore")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| "Missing or invalid 'confidenceScore'".to_string())?;
    let confidence_score = match policy {
        SchemaPolicy::Strict => ConfidenceScore::from_f64(raw_score).map_err(|e| e.to_string())?,
        SchemaPolicy::Lenient => ConfidenceScore::clamped(raw_score),
    };

    let explanation = obj
        .get("explanation")
        .and_then(|v| v.as_str())
        .ok_or_else(|| "Missing or invalid 'explanation'".to_string())?
        .to_string();

    Ok(AnalysisResult {
        verdict,
        confidence_score,
        explanation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fenced(body: &str) -> String {
        format!("Here you go:\n```json\n{}\n```\nThanks.", body)
    }

    #[test]
    fn test_parse_valid_block() {
        let response = fenced(
            r#"{"verdict":"MISLEADING","confidenceScore":73,"explanation":"Cherry-picked data."}"#,
        );

        let result = extract_verdict(&response, SchemaPolicy::Strict)
            .into_result()
            .unwrap();
        assert_eq!(result.verdict, Verdict::Misleading);
        assert_eq!(result.confidence_score.value(), 73);
        assert_eq!(result.explanation, "Cherry-picked data.");
    }

    #[test]
    fn test_fence_on_same_line() {
        let response = r#"```json {"verdict":"UNVERIFIABLE","confidenceScore":10,"explanation":"e"}```"#;
        let extraction = extract_verdict(response, SchemaPolicy::Strict);
        assert!(extraction.is_parsed());
    }

    #[test]
    fn test_no_fenced_block() {
        let response = r#"{"verdict":"MISLEADING","confidenceScore":73,"explanation":"x"}"#;
        assert_eq!(
            extract_verdict(response, SchemaPolicy::Strict),
            Extraction::Unparsed(UnparsedReason::NoFencedBlock)
        );
    }

    #[test]
    fn test_untagged_fence_is_not_accepted() {
        let response = "```\n{\"verdict\":\"MISLEADING\",\"confidenceScore\":73,\"explanation\":\"x\"}\n```";
        assert_eq!(
            extract_verdict(response, SchemaPolicy::Strict),
            Extraction::Unparsed(UnparsedReason::NoFencedBlock)
        );
    }

    #[test]
    fn test_trailing_comma_is_malformed() {
        let response =
            fenced(r#"{"verdict":"MISLEADING","confidenceScore":73,"explanation":"x",}"#);
        assert!(matches!(
            extract_verdict(&response, SchemaPolicy::Strict),
            Extraction::Unparsed(UnparsedReason::MalformedJson(_))
        ));
    }

    #[test]
    fn test_only_first_block_is_used() {
        let response = format!(
            "{}\n{}",
            fenced(r#"{"verdict":"VERIFIED_TRUE","confidenceScore":90,"explanation":"first"}"#),
            fenced(r#"{"verdict":"MISLEADING","confidenceScore":10,"explanation":"second"}"#),
        );
        let result = extract_verdict(&response, SchemaPolicy::Strict)
            .into_result()
            .unwrap();
        assert_eq!(result.explanation, "first");
    }

    #[test]
    fn test_unknown_verdict_rejected_under_both_policies() {
        let response =
            fenced(r#"{"verdict":"MOSTLY_TRUE","confidenceScore":50,"explanation":"x"}"#);
        for policy in [SchemaPolicy::Strict, SchemaPolicy::Lenient] {
            assert!(matches!(
                extract_verdict(&response, policy),
                Extraction::Unparsed(UnparsedReason::SchemaViolation(_))
            ));
        }
    }

    #[test]
    fn test_out_of_range_score() {
        let response =
            fenced(r#"{"verdict":"MISLEADING","confidenceScore":150,"explanation":"x"}"#);

        assert!(matches!(
            extract_verdict(&response, SchemaPolicy::Strict),
            Extraction::Unparsed(UnparsedReason::SchemaViolation(_))
        ));

        let lenient = extract_verdict(&response, SchemaPolicy::Lenient)
            .into_result()
            .unwrap();
        assert_eq!(lenient.confidence_score.value(), 100);
    }

    #[test]
    fn test_fractional_score() {
        let response =
            fenced(r#"{"verdict":"MISLEADING","confidenceScore":72.6,"explanation":"x"}"#);

        assert!(!extract_verdict(&response, SchemaPolicy::Strict).is_parsed());
        let lenient = extract_verdict(&response, SchemaPolicy::Lenient)
            .into_result()
            .unwrap();
        assert_eq!(lenient.confidence_score.value(), 73);
    }

    #[test]
    fn test_type_mismatches() {
        for body in [
            r#"{"verdict":"MISLEADING","confidenceScore":"73","explanation":"x"}"#,
            r#"{"verdict":7,"confidenceScore":73,"explanation":"x"}"#,
            r#"{"verdict":"MISLEADING","confidenceScore":73,"explanation":null}"#,
            r#"{"verdict":"MISLEADING","confidenceScore":73}"#,
            r#"["MISLEADING", 73, "x"]"#,
        ] {
            assert!(
                matches!(
                    extract_verdict(&fenced(body), SchemaPolicy::Lenient),
                    Extraction::Unparsed(UnparsedReason::SchemaViolation(_))
                ),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_extra_keys_ignored() {
        let response = fenced(
            r#"{"verdict":"PARTIALLY_TRUE","confidenceScore":55,"explanation":"x","claims":[]}"#,
        );
        assert!(extract_verdict(&response, SchemaPolicy::Strict).is_parsed());
    }

    #[test]
    fn test_extract_sources_preserves_order() {
        let generation = Generation {
            text: "no block".to_string(),
            sources: vec![GroundingSource::web("a", "A"), GroundingSource::web("b", "")],
        };

        let sources = extract_sources(&generation);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].display_text(), "A");
        assert_eq!(sources[1].display_text(), "b");
    }

    #[test]
    fn test_triple_backticks_in_explanation_close_the_block() {
        let body = serde_json::json!({
            "verdict": "MISLEADING",
            "confidenceScore": 60,
            "explanation": "uses ``` fences",
        });
        let response = fenced(&body.to_string());

        match extract_verdict(&response, SchemaPolicy::Strict) {
            Extraction::Unparsed(UnparsedReason::MalformedJson(_)) => {}
            other => panic!("Expected MalformedJson, got {:?}", other),
        }
    }

    #[test]
    fn test_short_backtick_runs_survive() {
        let body = serde_json::json!({
            "verdict": "MISLEADING",
            "confidenceScore": 60,
            "explanation": "see `a` and ``b``",
        });
        let result = extract_verdict(&fenced(&body.to_string()), SchemaPolicy::Strict)
            .into_result()
            .unwrap();
        assert_eq!(result.explanation, "see `a` and ``b``");
    }

    #[test]
    fn test_extract_sources_empty() {
        assert!(extract_sources(&Generation::text_only("x")).is_empty());
    }

    proptest! {
        #[test]
        fn prop_extraction_is_idempotent(text in ".*") {
            let first = extract_verdict(&text, SchemaPolicy::Strict);
            let second = extract_verdict(&text, SchemaPolicy::Strict);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_round_trip_is_lossless(
            idx in 0usize..5,
            score in 0u8..=100,
            // one or two backticks in a row; three would close the fence
            explanation in r"[^\x00-\x1f`]*(`{1,2}[^\x00-\x1f`]+)*",
        ) {
            let verdict = Verdict::ALL[idx];
            let body = serde_json::json!({
                "verdict": verdict.as_str(),
                "confidenceScore": score,
                "explanation": explanation,
            });
            let response = fenced(&body.to_string());

            let result = extract_verdict(&response, SchemaPolicy::Strict).into_result();
            prop_assert_eq!(
                result,
                Some(AnalysisResult {
                    verdict,
                    confidence_score: ConfidenceScore::new(score).unwrap(),
                    explanation,
                })
            );
        }
    }
}
