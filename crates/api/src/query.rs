//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /api/widgets`.
///
/// `sortBy` / `sortOrder` select the sorted listing; `type` filters by
/// legacy widget type. The two modes are mutually exclusive.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetListParams {
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    #[serde(rename = "type")]
    pub widget_type: Option<String>,
}

impl WidgetListParams {
    pub fn wants_sorting(&self) -> bool {
        self.sort_by.is_some() || self.sort_order.is_some()
    }
}
