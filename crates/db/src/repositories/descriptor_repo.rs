//! In-memory store for widget descriptors.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use widget_feed_core::descriptor::WidgetDescriptor;
use widget_feed_core::repository::{RepositoryError, WidgetDescriptorRepository};
use widget_feed_core::value_objects::WidgetId;

/// Descriptors keyed by id, listed in insertion order.
///
/// Replacing an existing id keeps its original position; deleting shifts the
/// remaining entries so order stays stable.
#[derive(Default)]
pub struct InMemoryWidgetDescriptorRepository {
    descriptors: RwLock<IndexMap<WidgetId, WidgetDescriptor>>,
}

impl InMemoryWidgetDescriptorRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored descriptors.
    pub async fn len(&self) -> usize {
        self.descriptors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.descriptors.read().await.is_empty()
    }
}

#[async_trait]
impl WidgetDescriptorRepository for InMemoryWidgetDescriptorRepository {
    async fn save(
        &self,
        descriptor: WidgetDescriptor,
    ) -> Result<WidgetDescriptor, RepositoryError> {
        tracing::debug!(
            widget_id = %descriptor.id(),
            content_type = %descriptor.content_type(),
            "Saving widget descriptor",
        );
        self.descriptors
            .write()
            .await
            .insert(descriptor.id().clone(), descriptor.clone());
        Ok(descriptor)
    }

    async fn find_by_id(
        &self,
        id: &WidgetId,
    ) -> Result<Option<WidgetDescriptor>, RepositoryError> {
        Ok(self.descriptors.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<WidgetDescriptor>, RepositoryError> {
        Ok(self.descriptors.read().await.values().cloned().collect())
    }

    async fn delete(&self, id: &WidgetId) -> Result<(), RepositoryError> {
        if self.descriptors.write().await.shift_remove(id).is_some() {
            tracing::debug!(widget_id = %id, "Deleted widget descriptor");
        }
        Ok(())
    }

    async fn exists(&self, id: &WidgetId) -> Result<bool, RepositoryError> {
        Ok(self.descriptors.read().await.contains_key(id))
    }
}
