//! Invite lifecycle.

pub mod policy;
pub mod request;
pub mod service;

pub use policy::TransitionPolicy;
pub use request::SendInviteRequest;
pub use service::InviteService;
