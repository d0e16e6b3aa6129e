//! Storage ports for the two aggregates.
//!
//! Adapters (in-memory today) implement these traits; use cases only ever
//! see `Arc<dyn …Repository>`. Each call is an independent operation: there
//! is no transaction spanning a find followed by a save.

use async_trait::async_trait;

use crate::descriptor::WidgetDescriptor;
use crate::value_objects::{LegacyWidgetType, WidgetId};
use crate::widget::Widget;

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Storage for legacy [`Widget`]s, keyed by id.
#[async_trait]
pub trait WidgetRepository: Send + Sync {
    /// Insert or replace by id, returning the stored widget.
    async fn save(&self, widget: Widget) -> Result<Widget, RepositoryError>;

    async fn find_by_id(&self, id: &WidgetId) -> Result<Option<Widget>, RepositoryError>;

    /// All widgets, newest timestamp first.
    async fn find_all(&self) -> Result<Vec<Widget>, RepositoryError>;

    /// Widgets of one type, newest timestamp first.
    async fn find_by_type(
        &self,
        widget_type: LegacyWidgetType,
    ) -> Result<Vec<Widget>, RepositoryError>;

    /// Remove by id. Removing an absent id is a no-op.
    async fn delete(&self, id: &WidgetId) -> Result<(), RepositoryError>;

    async fn exists(&self, id: &WidgetId) -> Result<bool, RepositoryError>;
}

/// Storage for [`WidgetDescriptor`]s, keyed by id.
#[async_trait]
pub trait WidgetDescriptorRepository: Send + Sync {
    /// Insert or replace by id, returning the stored descriptor.
    async fn save(&self, descriptor: WidgetDescriptor)
        -> Result<WidgetDescriptor, RepositoryError>;

    async fn find_by_id(&self, id: &WidgetId)
        -> Result<Option<WidgetDescriptor>, RepositoryError>;

    /// All descriptors in insertion order.
    async fn find_all(&self) -> Result<Vec<WidgetDescriptor>, RepositoryError>;

    /// Remove by id. Removing an absent id is a no-op.
    async fn delete(&self, id: &WidgetId) -> Result<(), RepositoryError>;

    async fn exists(&self, id: &WidgetId) -> Result<bool, RepositoryError>;
}
