//! Route definitions for legacy widgets.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::widgets;
use crate::state::AppState;

/// Widget routes mounted at `/widgets`.
///
/// ```text
/// GET    /        -> list_widgets (?sortBy, ?sortOrder, ?type)
/// POST   /        -> create_widget
/// PUT    /{id}    -> update_widget_content
/// DELETE /{id}    -> delete_widget
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(widgets::list_widgets).post(widgets::create_widget))
        .route(
            "/{id}",
            put(widgets::update_widget_content).delete(widgets::delete_widget),
        )
}
