//! Request types for analysis

/// Text submitted for fact-checking
///
/// Emptiness and trimming are the caller's concern; the analyzer embeds the
/// text exactly as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Raw user text
    pub text: String,
}

impl AnalysisRequest {
    /// Wrap raw text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Length in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let request = AnalysisRequest::new("héllo");
        assert_eq!(request.char_len(), 5);
        assert_eq!(request.text.len(), 6);
    }
}
