//! # invitehub-entity
//!
//! Domain entity models for InviteHub. Every struct in this crate is either
//! a stored record or a domain value object. Field names serialize in the
//! camelCase used by the JSON snapshots.

pub mod invite;
pub mod permission;
pub mod user;
