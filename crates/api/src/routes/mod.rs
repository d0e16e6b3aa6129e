pub mod descriptors;
pub mod health;
pub mod widgets;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /widgets                                   list, create
/// /widgets/{id}                              update content, delete
///
/// /widget-descriptors                        list, create
/// /widget-descriptors/{id}                   get, delete
/// /widget-descriptors/{id}/static-content    replace static content (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/widgets", widgets::router())
        .nest("/widget-descriptors", descriptors::router())
}
