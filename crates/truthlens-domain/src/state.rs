//! Analysis lifecycle as a single tagged state
//!
//! One variant at a time, so "loading" and "has error" can never both be set.

use crate::analysis::AnalysisReport;

/// Lifecycle of one user-facing analysis
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisState {
    /// Nothing submitted yet
    #[default]
    Idle,

    /// A request is in flight
    Loading,

    /// The backend answered (the report may still carry no parsed result)
    Succeeded(AnalysisReport),

    /// The request failed with a user-presentable message
    Failed(String),
}

/// Invalid state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A request is already in flight
    AlreadyLoading,

    /// Completion reported with no request in flight
    NotLoading,
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::AlreadyLoading => f.write_str("an analysis is already in progress"),
            StateError::NotLoading => f.write_str("no analysis is in progress"),
        }
    }
}

impl std::error::Error for StateError {}

impl AnalysisState {
    /// Start a new request. Rejected while one is outstanding.
    pub fn begin(&mut self) -> Result<(), StateError> {
        if self.is_loading() {
            return Err(StateError::AlreadyLoading);
        }
        *self = AnalysisState::Loading;
        Ok(())
    }

    /// Record a completed request
    pub fn succeed(&mut self, report: AnalysisReport) -> Result<(), StateError> {
        if !self.is_loading() {
            return Err(StateError::NotLoading);
        }
        *self = AnalysisState::Succeeded(report);
        Ok(())
    }

    /// Record a failed request
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), StateError> {
        if !self.is_loading() {
            return Err(StateError::NotLoading);
        }
        *self = AnalysisState::Failed(message.into());
        Ok(())
    }

    /// Return to idle, discarding any result or error
    pub fn reset(&mut self) {
        *self = AnalysisState::Idle;
    }

    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading)
    }

    /// Latest report, if the last request succeeded
    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisState::Succeeded(report) => Some(report),
            _ => None,
        }
    }

    /// Latest error message, if the last request failed
    pub fn error(&self) -> Option<&str> {
        match self {
            AnalysisState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut state = AnalysisState::default();
        assert_eq!(state, AnalysisState::Idle);

        state.begin().unwrap();
        assert!(state.is_loading());

        state.succeed(AnalysisReport::default()).unwrap();
        assert!(state.report().is_some());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_no_resubmission_while_loading() {
        let mut state = AnalysisState::default();
        state.begin().unwrap();
        assert_eq!(state.begin(), Err(StateError::AlreadyLoading));
    }

    #[test]
    fn test_completion_requires_loading() {
        let mut state = AnalysisState::default();
        assert_eq!(state.succeed(AnalysisReport::default()), Err(StateError::NotLoading));
        assert_eq!(state.fail("boom"), Err(StateError::NotLoading));
    }

    #[test]
    fn test_failure_then_retry_clears_error() {
        let mut state = AnalysisState::default();
        state.begin().unwrap();
        state.fail("network down").unwrap();
        assert_eq!(state.error(), Some("network down"));

        state.begin().unwrap();
        assert!(state.error().is_none());
        assert!(state.report().is_none());
    }

    #[test]
    fn test_reset() {
        let mut state = AnalysisState::Failed("x".to_string());
        state.reset();
        assert_eq!(state, AnalysisState::Idle);
    }
}
