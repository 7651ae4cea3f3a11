//! Capability flags and the read/write dependency rules between them.

pub mod capability;
pub mod dependency;
pub mod model;

pub use capability::{Access, Capability, ResourceCategory};
pub use model::{PermissionPatch, PermissionSet};
