//! Use cases for PRD widget descriptors.

use std::sync::Arc;

use crate::descriptor::WidgetDescriptor;
use crate::error::CoreError;
use crate::repository::WidgetDescriptorRepository;
use crate::types::StaticContent;
use crate::value_objects::{ContentType, ErrorState, LoadingState, WidgetId, WidgetType};

const ENTITY: &str = "WidgetDescriptor";

fn not_found(id: &WidgetId) -> CoreError {
    CoreError::NotFound {
        entity: ENTITY,
        id: id.to_string(),
    }
}

fn required(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Raw creation request. Which optional fields are required depends on
/// `content_type`: static needs `static_content`; dynamic needs `data_url`,
/// `loading_state` and `error_state`.
#[derive(Debug, Clone, Default)]
pub struct CreateWidgetDescriptorRequest {
    pub widget_type: String,
    pub content_type: String,
    pub static_content: Option<StaticContent>,
    pub data_url: Option<String>,
    pub loading_state: Option<String>,
    pub error_state: Option<String>,
}

pub struct CreateWidgetDescriptor {
    repo: Arc<dyn WidgetDescriptorRepository>,
}

impl CreateWidgetDescriptor {
    pub fn new(repo: Arc<dyn WidgetDescriptorRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        request: CreateWidgetDescriptorRequest,
    ) -> Result<WidgetDescriptor, CoreError> {
        let widget_type: WidgetType = request.widget_type.parse()?;
        let content_type: ContentType = request.content_type.parse()?;
        let id = WidgetId::generate();

        let descriptor = match content_type {
            ContentType::Static => {
                let static_content = request
                    .static_content
                    .ok_or_else(|| required("Static content is required for static widgets"))?;
                WidgetDescriptor::create_static(id, widget_type, content_type, static_content)?
            }
            ContentType::Dynamic => {
                let data_url = request
                    .data_url
                    .filter(|url| !url.is_empty())
                    .ok_or_else(|| required("Data URL is required for dynamic widgets"))?;
                let loading_state = request
                    .loading_state
                    .ok_or_else(|| required("Loading state is required for dynamic widgets"))?;
                let error_state = request
                    .error_state
                    .ok_or_else(|| required("Error state is required for dynamic widgets"))?;

                let loading_state: LoadingState = loading_state.parse()?;
                let error_state: ErrorState = error_state.parse()?;

                WidgetDescriptor::create_dynamic(
                    id,
                    widget_type,
                    content_type,
                    data_url,
                    Some(loading_state),
                    Some(error_state),
                )?
            }
        };

        Ok(self.repo.save(descriptor).await?)
    }
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

pub struct GetAllWidgetDescriptors {
    repo: Arc<dyn WidgetDescriptorRepository>,
}

impl GetAllWidgetDescriptors {
    pub fn new(repo: Arc<dyn WidgetDescriptorRepository>) -> Self {
        Self { repo }
    }

    /// All descriptors in insertion order.
    pub async fn execute(&self) -> Result<Vec<WidgetDescriptor>, CoreError> {
        Ok(self.repo.find_all().await?)
    }
}

pub struct GetWidgetDescriptor {
    repo: Arc<dyn WidgetDescriptorRepository>,
}

impl GetWidgetDescriptor {
    pub fn new(repo: Arc<dyn WidgetDescriptorRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<WidgetDescriptor, CoreError> {
        let id = WidgetId::parse(id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(&id))
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

pub struct UpdateStaticContent {
    repo: Arc<dyn WidgetDescriptorRepository>,
}

impl UpdateStaticContent {
    pub fn new(repo: Arc<dyn WidgetDescriptorRepository>) -> Self {
        Self { repo }
    }

    /// Replace the stored descriptor with a copy carrying new static content.
    pub async fn execute(
        &self,
        id: &str,
        static_content: StaticContent,
    ) -> Result<WidgetDescriptor, CoreError> {
        let id = WidgetId::parse(id)?;
        let current = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| not_found(&id))?;

        let updated = current.update_static_content(static_content)?;
        Ok(self.repo.save(updated).await?)
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

pub struct DeleteWidgetDescriptor {
    repo: Arc<dyn WidgetDescriptorRepository>,
}

impl DeleteWidgetDescriptor {
    pub fn new(repo: Arc<dyn WidgetDescriptorRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> Result<(), CoreError> {
        let id = WidgetId::parse(id)?;
        if !self.repo.exists(&id).await? {
            return Err(not_found(&id));
        }
        self.repo.delete(&id).await?;
        Ok(())
    }
}
