//! Sort parameters for widget listings.

use std::str::FromStr;

use crate::error::CoreError;
use crate::widget::Widget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Timestamp,
    Type,
}

impl SortField {
    pub const VALID_VALUES: &'static [&'static str] = &["timestamp", "type"];
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "timestamp" => Ok(SortField::Timestamp),
            "type" => Ok(SortField::Type),
            other => Err(CoreError::Validation(format!(
                "Invalid sort field: {other}. Valid fields are: {}",
                Self::VALID_VALUES.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const VALID_VALUES: &'static [&'static str] = &["asc", "desc"];
}

impl FromStr for SortOrder {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(CoreError::Validation(format!(
                "Invalid sort order: {other}. Valid orders are: {}",
                Self::VALID_VALUES.join(", ")
            ))),
        }
    }
}

/// Raw sort parameters as received from a client.
///
/// Absent or empty values fall back to `timestamp` / `desc`.
#[derive(Debug, Clone, Default)]
pub struct SortRequest {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl SortRequest {
    /// Validate both parameters, field first.
    pub fn parse(&self) -> Result<(SortField, SortOrder), CoreError> {
        let field = match self.sort_by.as_deref() {
            None | Some("") => SortField::default(),
            Some(raw) => raw.parse()?,
        };
        let order = match self.sort_order.as_deref() {
            None | Some("") => SortOrder::default(),
            Some(raw) => raw.parse()?,
        };
        Ok((field, order))
    }
}

/// Sort widgets in place. Equal keys keep their relative order.
pub fn sort_widgets(widgets: &mut [Widget], field: SortField, order: SortOrder) {
    widgets.sort_by(|a, b| {
        let ordering = match field {
            SortField::Timestamp => a.timestamp().cmp(&b.timestamp()),
            SortField::Type => a.widget_type().as_str().cmp(b.widget_type().as_str()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
