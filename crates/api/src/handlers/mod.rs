//! Request handlers.
//!
//! Handlers parse transport input, run the matching use case from
//! `widget_feed_core::use_cases` and map failures via [`AppError`](crate::error::AppError).

pub mod descriptors;
pub mod widgets;
