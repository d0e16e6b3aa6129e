//! Application use cases.
//!
//! Each use case owns an `Arc` to the repository port it needs, validates
//! raw request fields into value objects, and returns `Result<_, CoreError>`.
//! Storage failures surface as [`CoreError::Internal`](crate::error::CoreError::Internal).

pub mod descriptors;
pub mod sorting;
pub mod widgets;

pub use descriptors::{
    CreateWidgetDescriptor, CreateWidgetDescriptorRequest, DeleteWidgetDescriptor,
    GetAllWidgetDescriptors, GetWidgetDescriptor, UpdateStaticContent,
};
pub use sorting::{SortField, SortOrder, SortRequest};
pub use widgets::{
    CreateWidget, CreateWidgetRequest, DeleteWidget, GetAllWidgets, GetSortedWidgets,
    GetWidgetsByType, UpdateWidgetContent,
};
