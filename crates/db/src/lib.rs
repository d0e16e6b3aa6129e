//! Storage adapters for the widget feed.
//!
//! Implements the repository ports from `widget_feed_core::repository`.
//! The backend is chosen once at start-up via [`StorageBackend`].

use std::str::FromStr;
use std::sync::Arc;

use widget_feed_core::repository::{WidgetDescriptorRepository, WidgetRepository};

pub mod repositories;

pub use repositories::{InMemoryWidgetDescriptorRepository, InMemoryWidgetRepository};

/// Available storage backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Process-lifetime maps; nothing survives a restart.
    #[default]
    Memory,
}

#[derive(Debug, thiserror::Error)]
#[error("Unsupported storage backend '{0}'. Supported backends: memory")]
pub struct UnsupportedBackend(pub String);

impl FromStr for StorageBackend {
    type Err = UnsupportedBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            other => Err(UnsupportedBackend(other.to_string())),
        }
    }
}

/// One repository per aggregate, shared behind `Arc<dyn …>`.
#[derive(Clone)]
pub struct Repositories {
    pub widgets: Arc<dyn WidgetRepository>,
    pub descriptors: Arc<dyn WidgetDescriptorRepository>,
}

/// Build the repositories for the configured backend.
pub fn create_repositories(backend: StorageBackend) -> Repositories {
    match backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory storage backend");
            Repositories {
                widgets: Arc::new(InMemoryWidgetRepository::new()),
                descriptors: Arc::new(InMemoryWidgetDescriptorRepository::new()),
            }
        }
    }
}
