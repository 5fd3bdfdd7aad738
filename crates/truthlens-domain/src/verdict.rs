//! Verdict module - the closed set of fact-check outcomes

use serde::{Deserialize, Serialize};

/// Overall verdict for a piece of analyzed text
///
/// The set is closed: the model is instructed to emit exactly one of these
/// labels, and anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Claims are corroborated by credible sources
    VerifiedTrue,

    /// Facts may be accurate but are framed to mislead
    Misleading,

    /// Some claims hold, others do not
    PartiallyTrue,

    /// Claims contradict available evidence
    PotentiallyFalse,

    /// Not enough evidence either way
    Unverifiable,
}

impl Verdict {
    /// All verdicts, in prompt order
    pub const ALL: [Verdict; 5] = [
        Verdict::VerifiedTrue,
        Verdict::Misleading,
        Verdict::PartiallyTrue,
        Verdict::PotentiallyFalse,
        Verdict::Unverifiable,
    ];

    /// Wire label exactly as the model must emit it
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::VerifiedTrue => "VERIFIED_TRUE",
            Verdict::Misleading => "MISLEADING",
            Verdict::PartiallyTrue => "PARTIALLY_TRUE",
            Verdict::PotentiallyFalse => "POTENTIALLY_FALSE",
            Verdict::Unverifiable => "UNVERIFIABLE",
        }
    }

    /// Human-readable label for display
    pub fn display_label(&self) -> &'static str {
        match self {
            Verdict::VerifiedTrue => "Verified True",
            Verdict::Misleading => "Misleading",
            Verdict::PartiallyTrue => "Partially True",
            Verdict::PotentiallyFalse => "Potentially False",
            Verdict::Unverifiable => "Unverifiable",
        }
    }

    /// Parse a wire label. Matching is exact: the backend is told to use
    /// these strings verbatim.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid verdict: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_labels() {
        for verdict in Verdict::ALL {
            assert_eq!(Verdict::parse(verdict.as_str()), Some(verdict));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Verdict::parse("misleading"), None);
        assert_eq!(Verdict::parse(" MISLEADING"), None);
        assert_eq!(Verdict::parse("FALSE"), None);
    }

    #[test]
    fn test_serde_uses_wire_labels() {
        let json = serde_json::to_string(&Verdict::PotentiallyFalse).unwrap();
        assert_eq!(json, "\"POTENTIALLY_FALSE\"");

        let parsed: Verdict = serde_json::from_str("\"PARTIALLY_TRUE\"").unwrap();
        assert_eq!(parsed, Verdict::PartiallyTrue);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Verdict::VerifiedTrue.display_label(), "Verified True");
        assert_eq!(Verdict::Unverifiable.display_label(), "Unverifiable");
    }

    #[test]
    fn test_from_str_error() {
        let err = "MAYBE".parse::<Verdict>().unwrap_err();
        assert!(err.contains("MAYBE"));
    }
}
