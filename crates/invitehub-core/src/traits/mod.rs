//! Core traits defined in `invitehub-core` and implemented by other crates.

pub mod repository;

pub use repository::{Record, Repository};
