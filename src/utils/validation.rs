// file: src/utils/validation.rs
// description: argument validation for tool calls and configuration
// reference: input validation patterns

use crate::error::{ReadeckError, Result};

/// Upper bound on results requested per keyword; one page, never paginated.
pub const MAX_LIMIT: usize = 100;

pub struct Validator;

impl Validator {
    /// Keywords are single terms, never phrases.
    pub fn validate_keyword(keyword: &str) -> Result<()> {
        if keyword.chars().any(char::is_whitespace) {
            return Err(ReadeckError::InvalidArgument(format!(
                "Keywords cannot contain spaces: {:?}",
                keyword
            )));
        }

        Ok(())
    }

    /// Rejects a zero limit and caps anything above `MAX_LIMIT`.
    pub fn clamp_limit(limit: usize) -> Result<usize> {
        if limit == 0 {
            return Err(ReadeckError::InvalidArgument(
                "Limit must be greater than 0".to_string(),
            ));
        }

        Ok(limit.min(MAX_LIMIT))
    }

    /// Document ids are interpolated into a URL path and must stay one segment.
    pub fn validate_document_id(document_id: &str) -> Result<()> {
        if document_id.is_empty() {
            return Err(ReadeckError::InvalidArgument(
                "Document id cannot be empty".to_string(),
            ));
        }

        if document_id
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%'))
        {
            return Err(ReadeckError::InvalidArgument(format!(
                "Invalid document id: {:?}",
                document_id
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ReadeckError::InvalidArgument(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        match text.char_indices().nth(max_chars) {
            Some((idx, _)) => format!("{}...", &text[..idx]),
            None => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_keyword() {
        assert!(Validator::validate_keyword("rust").is_ok());
        assert!(Validator::validate_keyword("c++").is_ok());
        assert!(Validator::validate_keyword("").is_ok());
        assert!(Validator::validate_keyword("two words").is_err());
        assert!(Validator::validate_keyword("tab\tsep").is_err());
        assert!(Validator::validate_keyword("trailing ").is_err());
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(Validator::clamp_limit(1).unwrap(), 1);
        assert_eq!(Validator::clamp_limit(MAX_LIMIT).unwrap(), MAX_LIMIT);
        assert_eq!(Validator::clamp_limit(150).unwrap(), MAX_LIMIT);
        assert!(Validator::clamp_limit(0).is_err());
    }

    #[test]
    fn test_validate_document_id() {
        assert!(Validator::validate_document_id("abc123").is_ok());
        assert!(Validator::validate_document_id("Xy9-_z").is_ok());
        assert!(Validator::validate_document_id("").is_err());
        assert!(Validator::validate_document_id("../admin").is_err());
        assert!(Validator::validate_document_id("abc?x=1").is_err());
        assert!(Validator::validate_document_id("abc 123").is_err());
        assert!(Validator::validate_document_id("abc%2F..").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://example.com").is_ok());
        assert!(Validator::validate_url("http://example.com").is_ok());
        assert!(Validator::validate_url("example.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("ééééé", 2), "éé...");
    }
}
