//! # invitehub-database
//!
//! Record storage for InviteHub: a generic in-memory repository with
//! optimistic versioning, the user directory, and JSON snapshot files.

pub mod repositories;
pub mod snapshot;

pub use repositories::{MemoryRepository, MemoryUserDirectory, UserDirectory};
