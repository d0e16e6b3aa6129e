use serde::Serialize;

use crate::error::CoreError;

/// Maximum widget content length, in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

/// Free-form body of a legacy widget.
///
/// Any string up to [`MAX_CONTENT_LENGTH`] characters is accepted as-is,
/// including the empty string and whitespace-only text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WidgetContent(String);

impl WidgetContent {
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let value = value.into();
        let length = value.chars().count();
        if length > MAX_CONTENT_LENGTH {
            return Err(CoreError::InvalidContent(format!(
                "WidgetContent cannot exceed {MAX_CONTENT_LENGTH} characters (got {length})"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// True when the content has no visible text.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_content_up_to_limit() {
        let max = "a".repeat(MAX_CONTENT_LENGTH);
        let content = WidgetContent::new(max.clone()).unwrap();
        assert_eq!(content.len(), MAX_CONTENT_LENGTH);
        assert_eq!(content.as_str(), max);
    }

    #[test]
    fn rejects_content_over_limit() {
        let err = WidgetContent::new("a".repeat(MAX_CONTENT_LENGTH + 1)).unwrap_err();
        assert_matches!(err, CoreError::InvalidContent(ref m) if m.contains("10000"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let content = WidgetContent::new("héllo ✓").unwrap();
        assert_eq!(content.len(), 7);

        let wide = "é".repeat(MAX_CONTENT_LENGTH);
        assert!(WidgetContent::new(wide).is_ok());
    }

    #[test]
    fn empty_and_whitespace_are_valid_but_empty() {
        assert!(WidgetContent::new("").unwrap().is_empty());
        let blank = WidgetContent::new("   \n\t").unwrap();
        assert!(blank.is_empty());
        assert_eq!(blank.len(), 5);
        assert!(!WidgetContent::new(" x ").unwrap().is_empty());
    }
}
