//! Grounding citations supplied by the generation backend

use serde::{Deserialize, Serialize};

/// Web page behind a citation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    /// Link to the page
    pub uri: String,

    /// Page title, possibly empty
    #[serde(default)]
    pub title: String,
}

/// A citation the backend returns alongside its answer
///
/// These come from response metadata, never from the model's JSON block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    /// Web citation
    pub web: WebSource,
}

impl GroundingSource {
    /// Create a web citation
    pub fn web(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            web: WebSource {
                uri: uri.into(),
                title: title.into(),
            },
        }
    }

    /// Link to the cited page
    pub fn uri(&self) -> &str {
        &self.web.uri
    }

    /// Text to show for this citation: the title, or the URI when the title is blank
    pub fn display_text(&self) -> &str {
        if self.web.title.trim().is_empty() {
            &self.web.uri
        } else {
            &self.web.title
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_text_prefers_title() {
        let source = GroundingSource::web("https://a.example", "A");
        assert_eq!(source.display_text(), "A");
    }

    #[test]
    fn test_display_text_falls_back_to_uri() {
        let source = GroundingSource::web("https://b.example", "");
        assert_eq!(source.display_text(), "https://b.example");

        let source = GroundingSource::web("https://c.example", "   ");
        assert_eq!(source.display_text(), "https://c.example");
    }

    #[test]
    fn test_deserialize_missing_title() {
        let source: GroundingSource =
            serde_json::from_str(r#"{"web": {"uri": "https://d.example"}}"#).unwrap();
        assert_eq!(source.web.title, "");
        assert_eq!(source.uri(), "https://d.example");
    }
}
