use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::invalid_value_message;
use crate::error::CoreError;

/// What a dynamic widget shows while its data is being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingState {
    Skeleton,
    Hidden,
}

impl LoadingState {
    pub const VALID_VALUES: &'static [&'static str] = &["skeleton", "hidden"];

    pub fn as_str(self) -> &'static str {
        match self {
            LoadingState::Skeleton => "skeleton",
            LoadingState::Hidden => "hidden",
        }
    }

    pub fn is_skeleton(self) -> bool {
        self == LoadingState::Skeleton
    }

    pub fn is_hidden(self) -> bool {
        self == LoadingState::Hidden
    }
}

impl FromStr for LoadingState {
    type Err = CoreError;

    /// Surrounding whitespace is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err(CoreError::Validation("LoadingState cannot be empty".into())),
            "skeleton" => Ok(LoadingState::Skeleton),
            "hidden" => Ok(LoadingState::Hidden),
            other => Err(CoreError::Validation(invalid_value_message(
                "loading state",
                other,
                Self::VALID_VALUES,
            ))),
        }
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_surrounding_whitespace() {
        assert_eq!(" skeleton ".parse::<LoadingState>().unwrap(), LoadingState::Skeleton);
        assert!("hidden".parse::<LoadingState>().unwrap().is_hidden());
    }

    #[test]
    fn rejects_unknown_state() {
        let msg = "spinner".parse::<LoadingState>().unwrap_err().to_string();
        assert!(msg.contains("'spinner'"));
        assert!(msg.contains("skeleton, hidden"));
        assert!("  ".parse::<LoadingState>().is_err());
    }
}
