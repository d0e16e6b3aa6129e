//! PRD widget descriptor aggregate.
//!
//! A descriptor is exactly one of two variants, modelled by
//! [`DescriptorContent`]:
//!
//! - **static**: carries an inline JSON object, no data URL or states.
//! - **dynamic**: carries a non-empty data URL plus optional loading and
//!   error presentation states, no inline content.
//!
//! Descriptors are immutable; [`WidgetDescriptor::update_static_content`]
//! returns a new instance with the same id.

use serde::Serialize;

use crate::error::CoreError;
use crate::types::StaticContent;
use crate::value_objects::{ContentType, ErrorState, LoadingState, WidgetId, WidgetType};

/// Variant-specific payload of a [`WidgetDescriptor`].
#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorContent {
    Static {
        static_content: StaticContent,
    },
    Dynamic {
        data_url: String,
        loading_state: Option<LoadingState>,
        error_state: Option<ErrorState>,
    },
}

impl DescriptorContent {
    pub fn content_type(&self) -> ContentType {
        match self {
            DescriptorContent::Static { .. } => ContentType::Static,
            DescriptorContent::Dynamic { .. } => ContentType::Dynamic,
        }
    }
}

/// Immutable description of how a widget is rendered and where its data
/// comes from.
///
/// Equality covers id, widget type and the full variant payload (deep
/// equality of static content).
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetDescriptor {
    id: WidgetId,
    widget_type: WidgetType,
    content: DescriptorContent,
}

impl WidgetDescriptor {
    /// Build a static descriptor. `content_type` must be `static`.
    pub fn create_static(
        id: WidgetId,
        widget_type: WidgetType,
        content_type: ContentType,
        static_content: StaticContent,
    ) -> Result<Self, CoreError> {
        if !content_type.is_static() {
            return Err(CoreError::InvalidDescriptor(
                "Cannot create static widget descriptor with dynamic content type".into(),
            ));
        }
        Ok(Self {
            id,
            widget_type,
            content: DescriptorContent::Static { static_content },
        })
    }

    /// Build a dynamic descriptor. `content_type` must be `dynamic` and
    /// `data_url` must contain non-whitespace text.
    pub fn create_dynamic(
        id: WidgetId,
        widget_type: WidgetType,
        content_type: ContentType,
        data_url: impl Into<String>,
        loading_state: Option<LoadingState>,
        error_state: Option<ErrorState>,
    ) -> Result<Self, CoreError> {
        if !content_type.is_dynamic() {
            return Err(CoreError::InvalidDescriptor(
                "Cannot create dynamic widget descriptor with static content type".into(),
            ));
        }
        let data_url = data_url.into();
        if data_url.trim().is_empty() {
            return Err(CoreError::InvalidDescriptor(
                "Data URL cannot be empty for dynamic widgets".into(),
            ));
        }
        Ok(Self {
            id,
            widget_type,
            content: DescriptorContent::Dynamic {
                data_url,
                loading_state,
                error_state,
            },
        })
    }

    pub fn id(&self) -> &WidgetId {
        &self.id
    }

    pub fn widget_type(&self) -> WidgetType {
        self.widget_type
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    pub fn content(&self) -> &DescriptorContent {
        &self.content
    }

    pub fn static_content(&self) -> Option<&StaticContent> {
        match &self.content {
            DescriptorContent::Static { static_content } => Some(static_content),
            DescriptorContent::Dynamic { .. } => None,
        }
    }

    pub fn data_url(&self) -> Option<&str> {
        match &self.content {
            DescriptorContent::Dynamic { data_url, .. } => Some(data_url),
            DescriptorContent::Static { .. } => None,
        }
    }

    pub fn loading_state(&self) -> Option<LoadingState> {
        match &self.content {
            DescriptorContent::Dynamic { loading_state, .. } => *loading_state,
            DescriptorContent::Static { .. } => None,
        }
    }

    pub fn error_state(&self) -> Option<ErrorState> {
        match &self.content {
            DescriptorContent::Dynamic { error_state, .. } => *error_state,
            DescriptorContent::Static { .. } => None,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.content, DescriptorContent::Static { .. })
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.content, DescriptorContent::Dynamic { .. })
    }

    /// Only `expandable_list` widgets expand.
    pub fn is_expandable(&self) -> bool {
        self.widget_type.is_expandable_list()
    }

    /// Only `quick_actions` widgets are interactive.
    pub fn is_interactive(&self) -> bool {
        self.widget_type.is_quick_actions()
    }

    /// Return a copy of this static descriptor with its content replaced.
    pub fn update_static_content(&self, static_content: StaticContent) -> Result<Self, CoreError> {
        if self.is_dynamic() {
            return Err(CoreError::InvalidDescriptor(
                "Cannot update static content on dynamic widget".into(),
            ));
        }
        Ok(Self {
            id: self.id.clone(),
            widget_type: self.widget_type,
            content: DescriptorContent::Static { static_content },
        })
    }

    /// Flatten into the wire representation.
    pub fn to_view(&self) -> DescriptorView {
        let config = match &self.content {
            DescriptorContent::Static { static_content } => DescriptorConfig::Static {
                static_content: static_content.clone(),
            },
            DescriptorContent::Dynamic {
                data_url,
                loading_state,
                error_state,
            } => DescriptorConfig::Dynamic {
                data_url: data_url.clone(),
                loading_state: *loading_state,
                error_state: *error_state,
            },
        };
        DescriptorView {
            id: self.id.to_string(),
            content_type: self.content_type(),
            widget_type: self.widget_type,
            config,
        }
    }
}

/// Client-facing shape of a descriptor: `{id, type, widgetType, config}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorView {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub widget_type: WidgetType,
    pub config: DescriptorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DescriptorConfig {
    #[serde(rename_all = "camelCase")]
    Static { static_content: StaticContent },
    #[serde(rename_all = "camelCase")]
    Dynamic {
        data_url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        loading_state: Option<LoadingState>,
        #[serde(skip_serializing_if = "Option::is_none")]
        error_state: Option<ErrorState>,
    },
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn object(value: serde_json::Value) -> StaticContent {
        value.as_object().cloned().expect("object literal")
    }

    fn hello_block() -> WidgetDescriptor {
        WidgetDescriptor::create_static(
            WidgetId::generate(),
            WidgetType::TextBlock,
            ContentType::Static,
            object(json!({"text": "Hello World"})),
        )
        .unwrap()
    }

    fn feed(url: &str) -> Result<WidgetDescriptor, CoreError> {
        WidgetDescriptor::create_dynamic(
            WidgetId::generate(),
            WidgetType::ImageList,
            ContentType::Dynamic,
            url,
            Some(LoadingState::Skeleton),
            Some(ErrorState::Retry),
        )
    }

    #[test]
    fn static_descriptor_exposes_its_content() {
        let d = hello_block();
        assert!(d.is_static());
        assert!(!d.is_dynamic());
        assert_eq!(d.content_type(), ContentType::Static);
        assert_eq!(d.static_content(), Some(&object(json!({"text": "Hello World"}))));
        assert_eq!(d.data_url(), None);
        assert_eq!(d.loading_state(), None);
        assert_eq!(d.error_state(), None);
    }

    #[test]
    fn static_factory_rejects_dynamic_content_type() {
        let err = WidgetDescriptor::create_static(
            WidgetId::generate(),
            WidgetType::TextBlock,
            ContentType::Dynamic,
            StaticContent::new(),
        )
        .unwrap_err();
        assert_matches!(err, CoreError::InvalidDescriptor(_));
    }

    #[test]
    fn dynamic_factory_rejects_static_content_type() {
        let err = WidgetDescriptor::create_dynamic(
            WidgetId::generate(),
            WidgetType::ImageList,
            ContentType::Static,
            "https://example.com/data",
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot create dynamic widget descriptor with static content type"
        );
    }

    #[test]
    fn dynamic_factory_rejects_blank_data_url() {
        for url in ["", "   ", "\n"] {
            let err = feed(url).unwrap_err();
            assert_matches!(err, CoreError::InvalidDescriptor(ref m) if m.contains("Data URL"));
        }
    }

    #[test]
    fn dynamic_descriptor_states_are_optional() {
        let d = WidgetDescriptor::create_dynamic(
            WidgetId::generate(),
            WidgetType::HorizontalCards,
            ContentType::Dynamic,
            "/api/cards",
            None,
            None,
        )
        .unwrap();
        assert!(d.is_dynamic());
        assert_eq!(d.data_url(), Some("/api/cards"));
        assert_eq!(d.loading_state(), None);
        assert_eq!(d.static_content(), None);
    }

    #[test]
    fn capability_queries_follow_widget_type() {
        let make = |t| {
            WidgetDescriptor::create_static(
                WidgetId::generate(),
                t,
                ContentType::Static,
                StaticContent::new(),
            )
            .unwrap()
        };
        assert!(make(WidgetType::ExpandableList).is_expandable());
        assert!(!make(WidgetType::ExpandableList).is_interactive());
        assert!(make(WidgetType::QuickActions).is_interactive());
        assert!(!make(WidgetType::TextBlock).is_expandable());
        assert!(!make(WidgetType::TextBlock).is_interactive());
    }

    #[test]
    fn update_static_content_is_copy_on_write() {
        let original = hello_block();
        let updated = original
            .update_static_content(object(json!({"text": "Bye"})))
            .unwrap();

        assert_eq!(updated.id(), original.id());
        assert_eq!(updated.widget_type(), original.widget_type());
        assert_eq!(updated.static_content(), Some(&object(json!({"text": "Bye"}))));
        assert_eq!(
            original.static_content(),
            Some(&object(json!({"text": "Hello World"})))
        );
        assert_ne!(updated, original);
    }

    #[test]
    fn update_static_content_fails_on_dynamic() {
        let d = feed("/api/images").unwrap();
        let err = d.update_static_content(StaticContent::new()).unwrap_err();
        assert_eq!(err.to_string(), "Cannot update static content on dynamic widget");
    }

    #[test]
    fn equality_compares_payload_deeply() {
        let id = WidgetId::generate();
        let make = |content: serde_json::Value| {
            WidgetDescriptor::create_static(
                id.clone(),
                WidgetType::TextBlock,
                ContentType::Static,
                object(content),
            )
            .unwrap()
        };
        assert_eq!(
            make(json!({"a": 1, "nested": {"b": [1, 2]}})),
            make(json!({"nested": {"b": [1, 2]}, "a": 1}))
        );
        assert_ne!(make(json!({"a": 1})), make(json!({"a": 2})));
    }

    #[test]
    fn dynamic_equality_includes_states() {
        let id = WidgetId::generate();
        let make = |loading| {
            WidgetDescriptor::create_dynamic(
                id.clone(),
                WidgetType::ImageList,
                ContentType::Dynamic,
                "/api/images",
                loading,
                Some(ErrorState::Hidden),
            )
            .unwrap()
        };
        assert_eq!(make(Some(LoadingState::Hidden)), make(Some(LoadingState::Hidden)));
        assert_ne!(make(Some(LoadingState::Hidden)), make(Some(LoadingState::Skeleton)));
    }

    #[test]
    fn view_shapes_static_and_dynamic_config() {
        let static_view = serde_json::to_value(hello_block().to_view()).unwrap();
        assert_eq!(static_view["type"], "static");
        assert_eq!(static_view["widgetType"], "text_block");
        assert_eq!(static_view["config"], json!({"staticContent": {"text": "Hello World"}}));

        let dynamic_view = serde_json::to_value(feed("/api/images").unwrap().to_view()).unwrap();
        assert_eq!(dynamic_view["type"], "dynamic");
        assert_eq!(
            dynamic_view["config"],
            json!({"dataUrl": "/api/images", "loadingState": "skeleton", "errorState": "retry"})
        );
    }

    #[test]
    fn dynamic_view_omits_absent_states() {
        let bare = WidgetDescriptor::create_dynamic(
            WidgetId::generate(),
            WidgetType::HorizontalCards,
            ContentType::Dynamic,
            "/api/cards",
            None,
            None,
        )
        .unwrap();

        let view = serde_json::to_value(bare.to_view()).unwrap();
        assert_eq!(view["config"], json!({"dataUrl": "/api/cards"}));
    }
}
