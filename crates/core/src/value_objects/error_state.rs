use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::invalid_value_message;
use crate::error::CoreError;

/// What a dynamic widget shows when fetching its data fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorState {
    Hidden,
    Message,
    Retry,
}

impl ErrorState {
    pub const VALID_VALUES: &'static [&'static str] = &["hidden", "message", "retry"];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorState::Hidden => "hidden",
            ErrorState::Message => "message",
            ErrorState::Retry => "retry",
        }
    }

    pub fn is_hidden(self) -> bool {
        self == ErrorState::Hidden
    }

    pub fn is_message(self) -> bool {
        self == ErrorState::Message
    }

    pub fn is_retry(self) -> bool {
        self == ErrorState::Retry
    }
}

impl FromStr for ErrorState {
    type Err = CoreError;

    /// Surrounding whitespace is ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "" => Err(CoreError::Validation("ErrorState cannot be empty".into())),
            "hidden" => Ok(ErrorState::Hidden),
            "message" => Ok(ErrorState::Message),
            "retry" => Ok(ErrorState::Retry),
            other => Err(CoreError::Validation(invalid_value_message(
                "error state",
                other,
                Self::VALID_VALUES,
            ))),
        }
    }
}

impl fmt::Display for ErrorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
