use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::invalid_value_message;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// PRD widget types (descriptors)
// ---------------------------------------------------------------------------

/// Presentation type of a [`WidgetDescriptor`](crate::descriptor::WidgetDescriptor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    ExpandableList,
    HorizontalCards,
    ImageList,
    TextBlock,
    HighlightBanner,
    QuickActions,
}

impl WidgetType {
    pub const ALL: [WidgetType; 6] = [
        WidgetType::ExpandableList,
        WidgetType::HorizontalCards,
        WidgetType::ImageList,
        WidgetType::TextBlock,
        WidgetType::HighlightBanner,
        WidgetType::QuickActions,
    ];

    pub const VALID_VALUES: &'static [&'static str] = &[
        "expandable_list",
        "horizontal_cards",
        "image_list",
        "text_block",
        "highlight_banner",
        "quick_actions",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WidgetType::ExpandableList => "expandable_list",
            WidgetType::HorizontalCards => "horizontal_cards",
            WidgetType::ImageList => "image_list",
            WidgetType::TextBlock => "text_block",
            WidgetType::HighlightBanner => "highlight_banner",
            WidgetType::QuickActions => "quick_actions",
        }
    }

    pub fn is_expandable_list(self) -> bool {
        self == WidgetType::ExpandableList
    }

    pub fn is_horizontal_cards(self) -> bool {
        self == WidgetType::HorizontalCards
    }

    pub fn is_image_list(self) -> bool {
        self == WidgetType::ImageList
    }

    pub fn is_text_block(self) -> bool {
        self == WidgetType::TextBlock
    }

    pub fn is_highlight_banner(self) -> bool {
        self == WidgetType::HighlightBanner
    }

    pub fn is_quick_actions(self) -> bool {
        self == WidgetType::QuickActions
    }
}

impl FromStr for WidgetType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(CoreError::InvalidWidgetType(
                "WidgetType cannot be empty".into(),
            ));
        }
        WidgetType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| {
                CoreError::InvalidWidgetType(invalid_value_message(
                    "widget type",
                    value,
                    Self::VALID_VALUES,
                ))
            })
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Legacy widget types (free-form widgets)
// ---------------------------------------------------------------------------

/// Type tag of a legacy [`Widget`](crate::widget::Widget).
///
/// Independent of [`WidgetType`]; the two vocabularies do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyWidgetType {
    Text,
    Image,
    Video,
    Link,
    Chart,
}

impl LegacyWidgetType {
    pub const ALL: [LegacyWidgetType; 5] = [
        LegacyWidgetType::Text,
        LegacyWidgetType::Image,
        LegacyWidgetType::Video,
        LegacyWidgetType::Link,
        LegacyWidgetType::Chart,
    ];

    pub const VALID_VALUES: &'static [&'static str] = &["text", "image", "video", "link", "chart"];

    pub fn as_str(self) -> &'static str {
        match self {
            LegacyWidgetType::Text => "text",
            LegacyWidgetType::Image => "image",
            LegacyWidgetType::Video => "video",
            LegacyWidgetType::Link => "link",
            LegacyWidgetType::Chart => "chart",
        }
    }
}

impl FromStr for LegacyWidgetType {
    type Err = CoreError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().is_empty() {
            return Err(CoreError::InvalidWidgetType(
                "WidgetType cannot be empty".into(),
            ));
        }
        LegacyWidgetType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| {
                CoreError::InvalidWidgetType(invalid_value_message(
                    "widget type",
                    value,
                    Self::VALID_VALUES,
                ))
            })
    }
}

impl fmt::Display for LegacyWidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
