//! Which accept/reject transitions are allowed.

use invitehub_core::config::TransitionMode;
use invitehub_core::error::AppError;
use invitehub_entity::invite::{InviteAction, InviteStatus};

/// Single decision point for invitee transitions.
///
/// The permissive mode lets accept and reject overwrite any status, including
/// an already accepted or rejected one. The strict mode only lets them apply
/// to pending invites.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransitionPolicy {
    mode: TransitionMode,
}

impl TransitionPolicy {
    /// Creates a policy for the given mode.
    pub fn new(mode: TransitionMode) -> Self {
        Self { mode }
    }

    /// Accept and reject always apply.
    pub fn permissive() -> Self {
        Self::new(TransitionMode::Permissive)
    }

    /// Accept and reject only apply to pending invites.
    pub fn strict() -> Self {
        Self::new(TransitionMode::Strict)
    }

    /// The configured mode.
    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    /// Refuse `action` on an invite currently in `current`, if the mode says so.
    pub fn check(&self, current: InviteStatus, action: InviteAction) -> Result<(), AppError> {
        match self.mode {
            TransitionMode::Permissive => Ok(()),
            TransitionMode::Strict if current.is_terminal() => Err(AppError::conflict(format!(
                "Cannot {action} an invite that is already {current}"
            ))),
            TransitionMode::Strict => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invitehub_core::error::ErrorKind;

    #[test]
    fn test_permissive_allows_everything() {
        let policy = TransitionPolicy::permissive();
        for status in [InviteStatus::Pending, InviteStatus::Accepted, InviteStatus::Rejected] {
            for action in [InviteAction::Accept, InviteAction::Reject] {
                assert!(policy.check(status, action).is_ok());
            }
        }
    }

    #[test]
    fn test_strict_only_allows_pending() {
        let policy = TransitionPolicy::strict();
        assert!(policy.check(InviteStatus::Pending, InviteAction::Accept).is_ok());
        let err = policy
            .check(InviteStatus::Accepted, InviteAction::Reject)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(
            err.message,
            "Cannot reject an invite that is already accepted"
        );
    }

    #[test]
    fn test_default_is_permissive() {
        assert_eq!(TransitionPolicy::default().mode(), TransitionMode::Permissive);
    }
}
