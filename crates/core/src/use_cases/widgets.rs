//! Use cases for legacy widgets.

use std::sync::Arc;

use crate::error::CoreError;
use crate::repository::WidgetRepository;
use crate::use_cases::sorting::{sort_widgets, SortRequest};
use crate::value_objects::{LegacyWidgetType, WidgetContent, WidgetId};
use crate::widget::Widget;

const ENTITY: &str = "Widget";

fn not_found(id: &WidgetId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CreateWidgetRequest {
    pub widget_type: String,
    pub content: String,
}

pub struct CreateWidget {
    repo: Arc<dyn WidgetRepository>,
}

impl CreateWidget {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    /// Validate the request, assign a fresh id and store the widget.
    pub async fn execute(&self, request: CreateWidgetRequest) -> Result<Widget, CoreError> {
        let widget_type: LegacyWidgetType = request.widget_type.parse()?;
        let content = WidgetContent::new(request.content)?;

        let widget = Widget::new(WidgetId::generate(), widget_type, content, None);
        Ok(self.repo.save(widget).await?)
    }
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

pub struct GetAllWidgets {
    repo: Arc<dyn WidgetRepository>,
}

impl GetAllWidgets {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    /// All widgets, newest first.
    pub async fn execute(&self) -> Result<Vec<Widget>, CoreError> {
        Ok(self.repo.find_all().await?)
    }
}

pub struct GetSortedWidgets {
    repo: Arc<dyn WidgetRepository>,
}

impl GetSortedWidgets {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    /// All widgets ordered by the requested field and direction.
    ///
    /// Sort parameters are validated before the repository is touched.
    pub async fn execute(&self, request: SortRequest) -> Result<Vec<Widget>, CoreError> {
        let (field, order) = request.parse()?;
        let mut widgets = self.repo.find_all().await?;
        sort_widgets(&mut widgets, field, order);
        Ok(widgets)
    }
}

pub struct GetWidgetsByType {
    repo: Arc<dyn WidgetRepository>,
}

impl GetWidgetsByType {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, widget_type: &str) -> Result<Vec<Widget>, CoreError> {
        let widget_type: LegacyWidgetType = widget_type.parse()?;
        Ok(self.repo.find_by_type(widget_type).await?)
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

pub struct UpdateWidgetContent {
    repo: Arc<dyn WidgetRepository>,
}

impl UpdateWidgetContent {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    /// Replace a widget's content, refreshing its timestamp.
    pub async fn execute(&self, id: &str, content: String) -> Result<Widget, CoreError> {
        let id = WidgetId::parse(id)?;
        let mut widget = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(&id))?;

        let content = WidgetContent::new(content)?;
        widget.update_content(content);

        Ok(self.repo.save(widget).await?)
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

pub struct DeleteWidget {
    repo: Arc<dyn WidgetRepository>,
}

impl DeleteWidget {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    /// Delete an existing widget; a missing id is reported as not found.
    pub async fn execute(&self, id: &str) -> Result<(), CoreError> {
        let id = WidgetId::parse(id)?;
        if self.repo.find_by_id(&id).await?.is_none() {
            return Err(not_found(&id));
        }
        self.repo.delete(&id).await?;
        Ok(())
    }
}
