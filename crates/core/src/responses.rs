//! Response content and citation validation.
//!
//! Shared by the create and edit paths so both enforce the same limits.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of response content in characters.
pub const MAX_RESPONSE_CONTENT_LENGTH: usize = 10_000;

/// Maximum number of citations attached to one response.
pub const MAX_CITATIONS: usize = 10;

/// Maximum length of a citation title in characters.
pub const MAX_CITATION_TITLE_LENGTH: usize = 200;

/// Absolute http(s) URL with a host and no whitespace.
static CITATION_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9\-._~%]+(:[0-9]+)?(/\S*)?$").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A source cited by a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate response content: must contain non-whitespace text and be within
/// the length limit.
pub fn validate_response_content(content: &str) -> Result<(), String> {
    if content.trim().is_empty() {
        return Err("Response content cannot be empty".to_string());
    }
    if content.chars().count() > MAX_RESPONSE_CONTENT_LENGTH {
        return Err(format!(
            "Response content exceeds maximum length of {MAX_RESPONSE_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the citation list attached to a response.
pub fn validate_citations(citations: &[Citation]) -> Result<(), String> {
    if citations.len() > MAX_CITATIONS {
        return Err(format!(
            "A response can cite at most {MAX_CITATIONS} sources"
        ));
    }
    for citation in citations {
        if !CITATION_URL_RE.is_match(&citation.url) {
            return Err(format!(
                "Invalid citation URL '{}'. Must be an absolute http or https URL",
                citation.url
            ));
        }
        if let Some(title) = &citation.title {
            if title.chars().count() > MAX_CITATION_TITLE_LENGTH {
                return Err(format!(
                    "Citation title exceeds maximum length of {MAX_CITATION_TITLE_LENGTH} characters"
                ));
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn cite(url: &str) -> Citation {
        Citation {
            url: url.to_string(),
            title: None,
        }
    }

    // -- validate_response_content -------------------------------------------

    #[test]
    fn valid_content_accepted() {
        assert!(validate_response_content("I think we agree on the goal.").is_ok());
    }

    #[test]
    fn blank_content_rejected() {
        let result = validate_response_content("   \n");
        assert!(result.unwrap_err().contains("cannot be empty"));
    }

    #[test]
    fn content_at_max_length_accepted() {
        let content = "a".repeat(MAX_RESPONSE_CONTENT_LENGTH);
        assert!(validate_response_content(&content).is_ok());
    }

    #[test]
    fn content_over_max_length_rejected() {
        let content = "a".repeat(MAX_RESPONSE_CONTENT_LENGTH + 1);
        let result = validate_response_content(&content);
        assert!(result.unwrap_err().contains("exceeds maximum length"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let content = "é".repeat(MAX_RESPONSE_CONTENT_LENGTH);
        assert!(validate_response_content(&content).is_ok());
    }

    // -- validate_citations --------------------------------------------------

    #[test]
    fn no_citations_accepted() {
        assert!(validate_citations(&[]).is_ok());
    }

    #[test]
    fn http_and_https_urls_accepted() {
        let citations = vec![
            cite("https://example.org/report.pdf"),
            cite("http://data.gov:8080/series?id=3"),
        ];
        assert!(validate_citations(&citations).is_ok());
    }

    #[test]
    fn non_http_scheme_rejected() {
        let result = validate_citations(&[cite("ftp://example.org/file")]);
        assert!(result.unwrap_err().contains("Invalid citation URL"));
    }

    #[test]
    fn relative_or_spaced_urls_rejected() {
        assert!(validate_citations(&[cite("/local/path")]).is_err());
        assert!(validate_citations(&[cite("https://exa mple.org")]).is_err());
        assert!(validate_citations(&[cite("https://")]).is_err());
    }

    #[test]
    fn too_many_citations_rejected() {
        let citations: Vec<Citation> = (0..=MAX_CITATIONS)
            .map(|i| cite(&format!("https://example.org/{i}")))
            .collect();
        let result = validate_citations(&citations);
        assert!(result.unwrap_err().contains("at most"));
    }

    #[test]
    fn long_title_rejected() {
        let citation = Citation {
            url: "https://example.org".to_string(),
            title: Some("t".repeat(MAX_CITATION_TITLE_LENGTH + 1)),
        };
        assert!(validate_citations(&[citation]).is_err());
    }
}
