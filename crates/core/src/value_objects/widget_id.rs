use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::CoreError;

/// Canonical textual form of a version-4 UUID, matched case-insensitively.
const UUID_V4_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

static UUID_V4_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UUID_V4_PATTERN).expect("valid regex"));

/// Identifier shared by both widget aggregates.
///
/// Wraps the string exactly as supplied (no case folding), so
/// `WidgetId::parse(s)?.as_str() == s` for every accepted `s`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// Generate a fresh random v4 identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Validate and wrap a raw identifier.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if !UUID_V4_RE.is_match(value) {
            return Err(CoreError::InvalidWidgetId(format!(
                "WidgetId must be a valid UUID (got '{value}')"
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WidgetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for WidgetId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
