//! Invite domain entities.

pub mod model;
pub mod status;

pub use model::Invite;
pub use status::{InviteAction, InviteRole, InviteStatus};
