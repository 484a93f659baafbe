//! Input validation for note data.

use crate::error::{NotebookError, Result};
use crate::model::Note;

/// Validates a note title.
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(NotebookError::Validation("Title cannot be empty".to_string()));
    }
    Ok(())
}

/// Validates note content.
pub fn validate_content(content: &str) -> Result<()> {
    if content.trim().is_empty() {
        return Err(NotebookError::Validation(
            "Content cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates a tag name.
pub fn validate_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(NotebookError::Validation("Tag cannot be empty".to_string()));
    }
    Ok(())
}

/// Validates every user-editable field of a note before it is written.
pub fn validate_note(note: &Note) -> Result<()> {
    validate_title(&note.title)?;
    validate_content(&note.content)?;
    for tag in &note.tags {
        validate_tag(tag)?;
    }
    Ok(())
}

/// Parses a note ID typed by the user.
pub fn parse_id(input: &str) -> Result<u64> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| NotebookError::InvalidId(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_empty() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_title_valid() {
        assert!(validate_title("A valid title").is_ok());
    }

    #[test]
    fn test_validate_title_has_no_length_limit() {
        assert!(validate_title(&"a".repeat(5_000)).is_ok());
        assert!(validate_title(&"я".repeat(500)).is_ok());
    }

    #[test]
    fn test_validate_content_empty() {
        assert!(validate_content("\n\t").is_err());
        assert!(validate_content("something").is_ok());
    }

    #[test]
    fn test_validate_tag() {
        assert!(validate_tag("work").is_ok());
        assert!(validate_tag("").is_err());
        assert!(validate_tag(&"t".repeat(300)).is_ok());
    }

    #[test]
    fn test_validate_note_accepts_long_fields() {
        let mut note = Note::new(&"t".repeat(1_000), &"c".repeat(100_000)).unwrap();
        note.tags.push("x".repeat(200));
        assert!(validate_note(&note).is_ok());
    }

    #[test]
    fn test_validate_note_checks_tags() {
        let mut note = Note::new("t", "c").unwrap();
        note.tags.push(String::new());
        assert!(validate_note(&note).is_err());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(NotebookError::InvalidId(s)) if s == "abc"));
        assert!(parse_id("-1").is_err());
        assert!(parse_id("").is_err());
    }
}
