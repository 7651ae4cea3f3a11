//! # invitehub-service
//!
//! Business logic service layer for InviteHub. Each service orchestrates
//! the invite store, the user directory, and credential checks to implement
//! one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references, so tests can swap in their own
//! stores.

pub mod auth;
pub mod invite;
pub mod user;

pub use auth::AuthService;
pub use invite::{InviteService, SendInviteRequest, TransitionPolicy};
pub use user::UserService;
