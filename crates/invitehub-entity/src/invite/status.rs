//! Invite status, invitee actions, and the two sides of an invite.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use invitehub_core::AppError;

/// Lifecycle state of an invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    /// Sent and awaiting a decision. The only initial state.
    #[default]
    Pending,
    /// Accepted by the invitee.
    Accepted,
    /// Rejected by the invitee, or deleted by the inviter.
    Rejected,
}

impl InviteStatus {
    /// Whether accept/reject have already been applied.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::validation(format!(
                "Invalid invite status: '{s}'. Expected one of: pending, accepted, rejected"
            ))),
        }
    }
}

/// Decision an invitee takes on an invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteAction {
    /// Accept the invite.
    Accept,
    /// Reject the invite.
    Reject,
}

impl InviteAction {
    /// The status this action moves an invite to.
    pub fn target_status(&self) -> InviteStatus {
        match self {
            Self::Accept => InviteStatus::Accepted,
            Self::Reject => InviteStatus::Rejected,
        }
    }

    /// Return the action as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for InviteAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteAction {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "accept" => Ok(Self::Accept),
            "reject" => Ok(Self::Reject),
            _ => Err(AppError::validation(format!(
                "Invalid invite action: '{s}'. Expected one of: accept, reject"
            ))),
        }
    }
}

/// Which side of an invite a user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InviteRole {
    /// The user sent the invite ("given").
    Inviter,
    /// The user received the invite ("received").
    Invitee,
}

impl InviteRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inviter => "inviter",
            Self::Invitee => "invitee",
        }
    }
}

impl fmt::Display for InviteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InviteRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inviter" | "given" => Ok(Self::Inviter),
            "invitee" | "received" => Ok(Self::Invitee),
            _ => Err(AppError::validation(format!(
                "Invalid invite role: '{s}'. Expected one of: inviter, invitee"
            ))),
        }
    }
}
