//! User entity model.

use serde::{Deserialize, Serialize};

use invitehub_core::types::UserId;

/// A registered user, as held by the user directory.
///
/// Users are reference data: invite operations read them but never create
/// or modify them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display handle.
    pub username: String,
    /// Email address, the secondary lookup key.
    pub email: String,
    /// Whether the account has been verified.
    #[serde(default)]
    pub is_verified: bool,
    /// Opaque one-way credential hash.
    #[serde(rename = "password", skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Password-free copy suitable for embedding in invites and results.
    pub fn summary(&self) -> UserSummary {
        UserSummary::from(self)
    }
}

/// A user reference with the credential stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User identifier.
    pub id: UserId,
    /// Display handle.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Verified flag at the time the summary was taken.
    #[serde(default)]
    pub is_verified: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            is_verified: user.is_verified,
        }
    }
}
