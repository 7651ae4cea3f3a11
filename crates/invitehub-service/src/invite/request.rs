//! Invite request payloads.

use serde::{Deserialize, Serialize};

use invitehub_entity::permission::PermissionSet;

/// Request to send a new invite.
///
/// Emails are taken as given and resolved against the user directory, so an
/// address that is not registered fails as not-found.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInviteRequest {
    /// Email of the user sending the invite.
    pub inviter_email: String,
    /// Email of the user being invited.
    pub invitee_email: String,
    /// Capabilities to grant. Normalized before storing.
    #[serde(default)]
    pub permissions: PermissionSet,
}

impl SendInviteRequest {
    /// Creates a request.
    pub fn new(
        inviter_email: impl Into<String>,
        invitee_email: impl Into<String>,
        permissions: PermissionSet,
    ) -> Self {
        Self {
            inviter_email: inviter_email.into(),
            invitee_email: invitee_email.into(),
            permissions,
        }
    }
}
