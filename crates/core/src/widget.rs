//! Legacy free-form widget aggregate.

use serde::Serialize;

use crate::types::Timestamp;
use crate::value_objects::{LegacyWidgetType, WidgetContent, WidgetId};

/// A free-form content card.
///
/// Content and timestamp are mutable through [`Widget::update_content`];
/// identity never changes. Two widgets are equal when their ids are equal.
#[derive(Debug, Clone)]
pub struct Widget {
    id: WidgetId,
    widget_type: LegacyWidgetType,
    content: WidgetContent,
    timestamp: Timestamp,
}

impl Widget {
    /// Assemble a widget from validated parts. `timestamp` defaults to now.
    pub fn new(
        id: WidgetId,
        widget_type: LegacyWidgetType,
        content: WidgetContent,
        timestamp: Option<Timestamp>,
    ) -> Self {
        Self {
            id,
            widget_type,
            content,
            timestamp: timestamp.unwrap_or_else(chrono::Utc::now),
        }
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn widget_type(&self) -> LegacyWidgetType {
        self.widget_type
    }

    pub fn content(&self) -> &WidgetContent {
        &self.content
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Replace the content and refresh the timestamp to now.
    pub fn update_content(&mut self, content: WidgetContent) {
        self.content = content;
        self.timestamp = chrono::Utc::now();
    }

    /// Flatten into the wire representation.
    pub fn to_view(&self) -> WidgetView {
        WidgetView {
            id: self.id.to_string(),
            widget_type: self.widget_type.as_str(),
            content: self.content.as_str().to_string(),
            timestamp: self.timestamp,
        }
    }
}

impl PartialEq for Widget {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Widget {}

/// Primitive snapshot of a [`Widget`], as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: &'static str,
    pub content: String,
    pub timestamp: Timestamp,
}
