//! Repository layer.
//!
//! Each repository owns its map behind a `tokio::sync::RwLock` and
//! implements the matching port from `widget_feed_core::repository`.

pub mod descriptor_repo;
pub mod widget_repo;

pub use descriptor_repo::InMemoryWidgetDescriptorRepository;
pub use widget_repo::InMemoryWidgetRepository;
