//! Analysis results returned to callers

use crate::confidence::ConfidenceScore;
use crate::source::GroundingSource;
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// A fully parsed fact-check
///
/// Only ever built from a successfully parsed and validated model reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall verdict
    pub verdict: Verdict,

    /// Certainty in the verdict
    pub confidence_score: ConfidenceScore,

    /// Neutral explanation naming the supporting evidence
    pub explanation: String,
}

/// What a single analysis hands back to the caller
///
/// `result` is `None` exactly when the reply could not be parsed.
/// `sources` is always present, possibly empty, in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Parsed verdict, if the reply honored the requested format
    pub result: Option<AnalysisResult>,

    /// Citations from backend metadata
    pub sources: Vec<GroundingSource>,
}

impl AnalysisReport {
    /// Whether the model reply violated the requested format
    pub fn is_format_violation(&self) -> bool {
        self.result.is_none()
    }
}
