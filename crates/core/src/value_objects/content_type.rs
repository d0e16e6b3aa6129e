use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::invalid_value_message;
use crate::error::CoreError;

/// Whether a descriptor carries its content inline or references it by URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Static,
    Dynamic,
}

impl ContentType {
    pub const VALID_VALUES: &'static [&'static str] = &["static", "dynamic"];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Static => "static",
            ContentType::Dynamic => "dynamic",
        }
    }

    pub fn is_static(self) -> bool {
        self == ContentType::Static
    }

    pub fn is_dynamic(self) -> bool {
        self == ContentType::Dynamic
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "static" => Ok(ContentType::Static),
            "dynamic" => Ok(ContentType::Dynamic),
            v if v.trim().is_empty() => {
                Err(CoreError::Validation("ContentType cannot be empty".into()))
            }
            v => Err(CoreError::Validation(invalid_value_message(
                "content type",
                v,
                Self::VALID_VALUES,
            ))),
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
