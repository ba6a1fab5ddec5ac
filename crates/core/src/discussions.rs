//! Discussion input validation.

/// Maximum length of a discussion title in characters.
pub const MAX_DISCUSSION_TITLE_LENGTH: usize = 200;

/// Maximum length of a discussion description in characters.
pub const MAX_DISCUSSION_DESCRIPTION_LENGTH: usize = 5_000;

/// Validate a discussion title: non-blank and within the length limit.
pub fn validate_discussion_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Discussion title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_DISCUSSION_TITLE_LENGTH {
        return Err(format!(
            "Discussion title exceeds maximum length of {MAX_DISCUSSION_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an optional discussion description.
pub fn validate_discussion_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DISCUSSION_DESCRIPTION_LENGTH {
        return Err(format!(
            "Discussion description exceeds maximum length of {MAX_DISCUSSION_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_title_accepted() {
        assert!(validate_discussion_title("Should the city expand bike lanes?").is_ok());
    }

    #[test]
    fn blank_title_rejected() {
        assert!(validate_discussion_title("").is_err());
        assert!(validate_discussion_title("   ").is_err());
    }

    #[test]
    fn long_title_rejected() {
        let title = "x".repeat(MAX_DISCUSSION_TITLE_LENGTH + 1);
        assert!(validate_discussion_title(&title)
            .unwrap_err()
            .contains("exceeds maximum length"));
    }

    #[test]
    fn description_limit_enforced() {
        assert!(validate_discussion_description("").is_ok());
        let long = "x".repeat(MAX_DISCUSSION_DESCRIPTION_LENGTH + 1);
        assert!(validate_discussion_description(&long).is_err());
    }
}
