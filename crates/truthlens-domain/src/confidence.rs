//! Confidence score module

use serde::{Deserialize, Serialize};

/// Upper bound of a confidence score
pub const MAX_CONFIDENCE: u8 = 100;

/// Errors constructing a confidence score
#[derive(Debug, Clone, PartialEq)]
pub enum ConfidenceError {
    /// Score lies outside [0, 100]
    OutOfRange(f64),

    /// Score has a fractional part
    NotInteger(f64),
}

impl std::fmt::Display for ConfidenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceError::OutOfRange(v) => {
                write!(f, "confidence score {} out of range [0, {}]", v, MAX_CONFIDENCE)
            }
            ConfidenceError::NotInteger(v) => write!(f, "confidence score {} is not an integer", v),
        }
    }
}

impl std::error::Error for ConfidenceError {}

/// Integer certainty in a verdict, 0 to 100 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ConfidenceScore(u8);

impl ConfidenceScore {
    /// Create a score, rejecting values above 100
    pub fn new(value: u8) -> Result<Self, ConfidenceError> {
        if value > MAX_CONFIDENCE {
            return Err(ConfidenceError::OutOfRange(value as f64));
        }
        Ok(Self(value))
    }

    /// Strict conversion from an arbitrary JSON number
    pub fn from_f64(value: f64) -> Result<Self, ConfidenceError> {
        if !value.is_finite() || value < 0.0 || value > MAX_CONFIDENCE as f64 {
            return Err(ConfidenceError::OutOfRange(value));
        }
        if value.fract() != 0.0 {
            return Err(ConfidenceError::NotInteger(value));
        }
        Ok(Self(value as u8))
    }

    /// Round and clamp into range. NaN maps to 0.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0);
        }
        Self(value.round().clamp(0.0, MAX_CONFIDENCE as f64) as u8)
    }

    /// Raw percentage value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ConfidenceScore {
    type Error = ConfidenceError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ConfidenceScore> for u8 {
    fn from(score: ConfidenceScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}
