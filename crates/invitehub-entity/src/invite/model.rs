//! Invite entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use invitehub_core::traits::Record;
use invitehub_core::types::InviteId;

use super::status::{InviteRole, InviteStatus};
use crate::permission::PermissionSet;
use crate::user::UserSummary;

/// An invitation from one user to another, carrying the capabilities the
/// inviter grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invite {
    /// Unique invite identifier.
    pub id: InviteId,
    /// The user who sent the invite.
    pub inviter: UserSummary,
    /// The user who received the invite.
    pub invitee: UserSummary,
    /// Capabilities granted to the invitee.
    #[serde(default)]
    pub permissions: PermissionSet,
    /// Lifecycle state.
    #[serde(default)]
    pub status: InviteStatus,
    /// When the invite was created.
    pub created_at: DateTime<Utc>,
    /// Optimistic-concurrency version, managed by the store.
    #[serde(default)]
    pub version: u64,
}

impl Invite {
    /// Build a fresh pending invite.
    pub fn new(inviter: UserSummary, invitee: UserSummary, permissions: PermissionSet) -> Self {
        Self {
            id: InviteId::new(),
            inviter,
            invitee,
            permissions,
            status: InviteStatus::Pending,
            created_at: Utc::now(),
            version: 0,
        }
    }

    /// The participant on the given side.
    pub fn participant(&self, role: InviteRole) -> &UserSummary {
        match role {
            InviteRole::Inviter => &self.inviter,
            InviteRole::Invitee => &self.invitee,
        }
    }

    /// Whether `email` is the participant on the given side.
    pub fn involves(&self, email: &str, role: InviteRole) -> bool {
        self.participant(role).email == email
    }

    /// Whether this invite lets an unverified invitee sign in.
    ///
    /// Status is not consulted: a pending or rejected invite from a verified
    /// inviter counts.
    pub fn vouches_for(&self, email: &str) -> bool {
        self.invitee.email == email && self.inviter.is_verified
    }
}

impl Record for Invite {
    type Id = InviteId;

    fn id(&self) -> &InviteId {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invitehub_core::types::UserId;

    fn summary(id: &str, email: &str, verified: bool) -> UserSummary {
        UserSummary {
            id: UserId::from(id),
            username: id.to_string(),
            email: email.to_string(),
            is_verified: verified,
        }
    }

    #[test]
    fn test_new_invite_is_pending() {
        let invite = Invite::new(
            summary("1", "a@x.io", true),
            summary("2", "b@x.io", false),
            PermissionSet::default(),
        );
        assert_eq!(invite.status, InviteStatus::Pending);
        assert!(invite.involves("a@x.io", InviteRole::Inviter));
        assert!(invite.involves("b@x.io", InviteRole::Invitee));
        assert!(!invite.involves("a@x.io", InviteRole::Invitee));
    }

    #[test]
    fn test_vouches_for_ignores_status() {
        let mut invite = Invite::new(
            summary("1", "a@x.io", true),
            summary("2", "b@x.io", false),
            PermissionSet::default(),
        );
        invite.status = InviteStatus::Rejected;
        assert!(invite.vouches_for("b@x.io"));
        invite.inviter.is_verified = false;
        assert!(!invite.vouches_for("b@x.io"));
    }

    #[test]
    fn test_snapshot_shape() {
        let json = r#"{
            "id": "k3j9x0abc",
            "inviter": {"id": "1", "username": "ana", "email": "ana@x.io", "isVerified": true},
            "invitee": {"id": "2", "username": "bo", "email": "bo@x.io", "isVerified": false},
            "permissions": {"readPosts": true, "writePosts": false},
            "createdAt": "2024-05-01T10:00:00.000Z",
            "status": "pending"
        }"#;
        let invite: Invite = serde_json::from_str(json).expect("deserialize");
        assert_eq!(invite.id.as_str(), "k3j9x0abc");
        assert!(invite.permissions.read_posts);
        assert!(!invite.permissions.read_profile);
        assert_eq!(invite.version, 0);
    }
}
