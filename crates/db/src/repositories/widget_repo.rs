//! In-memory store for legacy widgets.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use widget_feed_core::repository::{RepositoryError, WidgetRepository};
use widget_feed_core::value_objects::{LegacyWidgetType, WidgetId};
use widget_feed_core::widget::Widget;

/// Widgets keyed by id. Listings are sorted newest-first on every read.
#[derive(Default)]
pub struct InMemoryWidgetRepository {
    widgets: RwLock<HashMap<WidgetId, Widget>>,
}

impl InMemoryWidgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored widgets.
    pub async fn len(&self) -> usize {
        self.widgets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.widgets.read().await.is_empty()
    }
}

fn newest_first(mut widgets: Vec<Widget>) -> Vec<Widget> {
    widgets.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    widgets
}

#[async_trait]
impl WidgetRepository for InMemoryWidgetRepository {
    async fn save(&self, widget: Widget) -> Result<Widget, RepositoryError> {
        tracing::debug!(widget_id = %widget.id(), "Saving widget");
        self.widgets
            .write()
            .await
            .insert(widget.id().clone(), widget.clone());
        Ok(widget)
    }

    async fn find_by_id(&self, id: &WidgetId) -> Result<Option<Widget>, RepositoryError> {
        Ok(self.widgets.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Widget>, RepositoryError> {
        let widgets: Vec<Widget> = self.widgets.read().await.values().cloned().collect();
        Ok(newest_first(widgets))
    }

    async fn find_by_type(
        &self,
        widget_type: LegacyWidgetType,
    ) -> Result<Vec<Widget>, RepositoryError> {
        let widgets: Vec<Widget> = self
            .widgets
            .read()
            .await
            .values()
            .filter(|w| w.widget_type() == widget_type)
            .cloned()
            .collect();
        Ok(newest_first(widgets))
    }

    async fn delete(&self, id: &WidgetId) -> Result<(), RepositoryError> {
        if self.widgets.write().await.remove(id).is_some() {
            tracing::debug!(widget_id = %id, "Deleted widget");
        }
        Ok(())
    }

    async fn exists(&self, id: &WidgetId) -> Result<bool, RepositoryError> {
        Ok(self.widgets.read().await.contains_key(id))
    }
}
