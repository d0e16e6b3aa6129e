//! Self-validating wrappers around primitive request values.
//!
//! Construction is the only validation point: once a value object exists it
//! satisfies its format or enumeration invariant.

mod content_type;
mod error_state;
mod loading_state;
mod widget_content;
mod widget_id;
mod widget_type;

pub use content_type::ContentType;
pub use error_state::ErrorState;
pub use loading_state::LoadingState;
pub use widget_content::{WidgetContent, MAX_CONTENT_LENGTH};
pub use widget_id::WidgetId;
pub use widget_type::{LegacyWidgetType, WidgetType};

/// Build the "not one of the allowed values" message shared by the
/// enumerated value objects.
fn invalid_value_message(label: &str, value: &str, valid: &[&str]) -> String {
    format!(
        "Invalid {label}: '{value}'. Valid values are: {}",
        valid.join(", ")
    )
}
