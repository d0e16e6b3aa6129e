//! Route definitions for widget descriptors.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::descriptors;
use crate::state::AppState;

/// Descriptor routes mounted at `/widget-descriptors`.
///
/// ```text
/// GET    /                      -> list_descriptors
/// POST   /                      -> create_descriptor
/// GET    /{id}                  -> get_descriptor
/// DELETE /{id}                  -> delete_descriptor
/// PUT    /{id}/static-content   -> update_static_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(descriptors::list_descriptors).post(descriptors::create_descriptor),
        )
        .route(
            "/{id}",
            get(descriptors::get_descriptor).delete(descriptors::delete_descriptor),
        )
        .route(
            "/{id}/static-content",
            put(descriptors::update_static_content),
        )
}
