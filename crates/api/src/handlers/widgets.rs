//! Handlers for the legacy `/widgets` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use widget_feed_core::use_cases::{
    CreateWidget, CreateWidgetRequest, DeleteWidget, GetAllWidgets, GetSortedWidgets,
    GetWidgetsByType, SortRequest, UpdateWidgetContent,
};
use widget_feed_core::widget::{Widget, WidgetView};

use crate::error::{AppError, AppResult};
use crate::query::WidgetListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /widgets`.
#[derive(Debug, Deserialize)]
pub struct CreateWidgetBody {
    #[serde(rename = "type")]
    pub widget_type: Option<String>,
    pub content: Option<String>,
}

/// Body of `PUT /widgets/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateWidgetBody {
    pub content: Option<String>,
}

fn views(widgets: Vec<Widget>) -> Vec<WidgetView> {
    widgets.iter().map(Widget::to_view).collect()
}

// ---------------------------------------------------------------------------
// POST /widgets
// ---------------------------------------------------------------------------

pub async fn create_widget(
    State(state): State<AppState>,
    Json(body): Json<CreateWidgetBody>,
) -> AppResult<impl IntoResponse> {
    let (Some(widget_type), Some(content)) = (body.widget_type, body.content) else {
        return Err(AppError::BadRequest("Type and content are required".into()));
    };

    let widget = CreateWidget::new(state.repos.widgets.clone())
        .execute(CreateWidgetRequest {
            widget_type,
            content,
        })
        .await?;

    tracing::info!(
        widget_id = %widget.id(),
        widget_type = %widget.widget_type(),
        "Widget created",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: widget.to_view(),
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /widgets
// ---------------------------------------------------------------------------

/// List widgets.
///
/// - no parameters: newest first
/// - `sortBy` / `sortOrder`: explicit ordering
/// - `type`: only widgets of that type, newest first
pub async fn list_widgets(
    State(state): State<AppState>,
    Query(params): Query<WidgetListParams>,
) -> AppResult<impl IntoResponse> {
    let repo = state.repos.widgets.clone();

    let widgets = match (&params.widget_type, params.wants_sorting()) {
        (Some(_), true) => {
            return Err(AppError::BadRequest(
                "The type filter cannot be combined with sortBy/sortOrder".into(),
            ));
        }
        (Some(widget_type), false) => GetWidgetsByType::new(repo).execute(widget_type).await?,
        (None, true) => {
            GetSortedWidgets::new(repo)
                .execute(SortRequest {
                    sort_by: params.sort_by,
                    sort_order: params.sort_order,
                })
                .await?
        }
        (None, false) => GetAllWidgets::new(repo).execute().await?,
    };

    Ok(Json(DataResponse {
        data: views(widgets),
    }))
}

// ---------------------------------------------------------------------------
// PUT /widgets/{id}
// ---------------------------------------------------------------------------

pub async fn update_widget_content(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateWidgetBody>,
) -> AppResult<impl IntoResponse> {
    let content = body
        .content
        .ok_or_else(|| AppError::BadRequest("Content is required".into()))?;

    let widget = UpdateWidgetContent::new(state.repos.widgets.clone())
        .execute(&id, content)
        .await?;

    tracing::info!(widget_id = %widget.id(), "Widget content updated");

    Ok(Json(DataResponse {
        data: widget.to_view(),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /widgets/{id}
// ---------------------------------------------------------------------------

pub async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    DeleteWidget::new(state.repos.widgets.clone())
        .execute(&id)
        .await?;

    tracing::info!(widget_id = %id, "Widget deleted");

    Ok(StatusCode::NO_CONTENT)
}
