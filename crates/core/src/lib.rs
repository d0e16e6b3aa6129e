//! Widget feed domain core.
//!
//! Value objects, the two widget aggregates, repository ports and the use
//! cases that orchestrate them. This crate performs no I/O; storage
//! adapters live in `widget_feed_db` and the HTTP surface in
//! `widget_feed_api`.

pub mod descriptor;
pub mod error;
pub mod repository;
pub mod types;
pub mod use_cases;
pub mod value_objects;
pub mod widget;

#[cfg(test)]
pub(crate) mod testing;
