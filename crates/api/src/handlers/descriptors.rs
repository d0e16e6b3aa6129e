//! Handlers for the `/widget-descriptors` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use widget_feed_core::descriptor::WidgetDescriptor;
use widget_feed_core::types::StaticContent;
use widget_feed_core::use_cases::{
    CreateWidgetDescriptor, CreateWidgetDescriptorRequest, DeleteWidgetDescriptor,
    GetAllWidgetDescriptors, GetWidgetDescriptor, UpdateStaticContent,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /widget-descriptors`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDescriptorBody {
    pub widget_type: Option<String>,
    pub content_type: Option<String>,
    pub static_content: Option<StaticContent>,
    pub data_url: Option<String>,
    pub loading_state: Option<String>,
    pub error_state: Option<String>,
}

/// Body of `PUT /widget-descriptors/{id}/static-content`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStaticContentBody {
    pub static_content: Option<StaticContent>,
}

// ---------------------------------------------------------------------------
// POST /widget-descriptors
// ---------------------------------------------------------------------------

pub async fn create_descriptor(
    State(state): State<AppState>,
    Json(body): Json<CreateDescriptorBody>,
) -> AppResult<impl IntoResponse> {
    let (Some(widget_type), Some(content_type)) = (body.widget_type, body.content_type) else {
        return Err(AppError::BadRequest(
            "widgetType and contentType are required".into(),
        ));
    };

    let descriptor = CreateWidgetDescriptor::new(state.repos.descriptors.clone())
        .execute(CreateWidgetDescriptorRequest {
            widget_type,
            content_type,
            static_content: body.static_content,
            data_url: body.data_url,
            loading_state: body.loading_state,
            error_state: body.error_state,
        })
        .await?;

    tracing::info!(
        widget_id = %descriptor.id(),
        widget_type = %descriptor.widget_type(),
        content_type = %descriptor.content_type(),
        "Widget descriptor created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: descriptor.to_view(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /widget-descriptors
// ---------------------------------------------------------------------------

pub async fn list_descriptors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let descriptors = GetAllWidgetDescriptors::new(state.repos.descriptors.clone())
        .execute()
        .await?;

    let data: Vec<_> = descriptors.iter().map(WidgetDescriptor::to_view).collect();
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// GET /widget-descriptors/{id}
// ---------------------------------------------------------------------------

pub async fn get_descriptor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let descriptor = GetWidgetDescriptor::new(state.repos.descriptors.clone())
        .execute(&id)
        .await?;

    Ok(Json(DataResponse {
        data: descriptor.to_view(),
    }))
}

// ---------------------------------------------------------------------------
// PUT /widget-descriptors/{id}/static-content
// ---------------------------------------------------------------------------

pub async fn update_static_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStaticContentBody>,
) -> AppResult<impl IntoResponse> {
    let static_content = body
        .static_content
        .ok_or_else(|| AppError::BadRequest("staticContent is required".into()))?;

    let descriptor = UpdateStaticContent::new(state.repos.descriptors.clone())
        .execute(&id, static_content)
        .await?;

    tracing::info!(widget_id = %descriptor.id(), "Widget descriptor static content updated");

    Ok(Json(DataResponse {
        data: descriptor.to_view(),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /widget-descriptors/{id}
// ---------------------------------------------------------------------------

pub async fn delete_descriptor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    DeleteWidgetDescriptor::new(state.repos.descriptors.clone())
        .execute(&id)
        .await?;

    tracing::info!(widget_id = %id, "Widget descriptor deleted");

    Ok(StatusCode::NO_CONTENT)
}
