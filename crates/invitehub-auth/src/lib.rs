//! # invitehub-auth
//!
//! Login support for InviteHub.
//!
//! ## Modules
//!
//! - `password`: one-way credential hashing (Argon2id by default)
//! - `eligibility`: whether an unverified user may sign in on the strength
//!   of an invite from a verified user

pub mod eligibility;
pub mod password;

pub use eligibility::LoginEligibility;
pub use password::{Argon2Hasher, PasswordHasher};
