//! Login eligibility for unverified users.

use std::sync::Arc;

use tracing::debug;

use invitehub_core::result::AppResult;
use invitehub_core::traits::Repository;
use invitehub_entity::invite::Invite;
use invitehub_entity::user::User;

/// Whether `user` may sign in given `invites`.
///
/// Verified users always may. Unverified users may if any invite names them
/// as invitee and comes from a verified inviter, whatever its status.
pub fn is_eligible(user: &User, invites: &[Invite]) -> bool {
    user.is_verified || invites.iter().any(|invite| invite.vouches_for(&user.email))
}

/// Eligibility check backed by the invite store.
#[derive(Clone)]
pub struct LoginEligibility {
    invites: Arc<dyn Repository<Invite>>,
}

impl std::fmt::Debug for LoginEligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginEligibility").finish_non_exhaustive()
    }
}

impl LoginEligibility {
    /// Creates an eligibility check over the given invite store.
    pub fn new(invites: Arc<dyn Repository<Invite>>) -> Self {
        Self { invites }
    }

    /// See [`is_eligible`].
    pub async fn is_eligible(&self, user: &User) -> AppResult<bool> {
        if user.is_verified {
            return Ok(true);
        }

        let email = user.email.as_str();
        let vouching = self
            .invites
            .scan(&|invite: &Invite| invite.vouches_for(email))
            .await?;

        debug!(
            user_id = %user.id,
            vouching_invites = vouching.len(),
            "Checked login eligibility for unverified user"
        );

        Ok(!vouching.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invitehub_core::types::UserId;
    use invitehub_database::MemoryRepository;
    use invitehub_entity::invite::InviteStatus;
    use invitehub_entity::permission::PermissionSet;

    fn user(id: &str, verified: bool) -> User {
        User {
            id: UserId::from(id),
            username: id.to_string(),
            email: format!("{id}@x.io"),
            is_verified: verified,
            password_hash: String::new(),
        }
    }

    fn invite(from: &User, to: &User, status: InviteStatus) -> Invite {
        let mut invite = Invite::new(from.summary(), to.summary(), PermissionSet::default());
        invite.status = status;
        invite
    }

    #[test]
    fn test_verified_user_needs_no_invite() {
        assert!(is_eligible(&user("v", true), &[]));
    }

    #[test]
    fn test_unverified_user_without_invites() {
        assert!(!is_eligible(&user("u", false), &[]));
    }

    #[test]
    fn test_pending_invite_from_verified_inviter_is_enough() {
        let newcomer = user("u", false);
        let invites = [invite(&user("v", true), &newcomer, InviteStatus::Pending)];
        assert!(is_eligible(&newcomer, &invites));
    }

    #[test]
    fn test_invite_from_unverified_inviter_is_not_enough() {
        let newcomer = user("u", false);
        let invites = [invite(&user("w", false), &newcomer, InviteStatus::Accepted)];
        assert!(!is_eligible(&newcomer, &invites));
    }

    #[test]
    fn test_invites_sent_by_the_user_do_not_count() {
        let newcomer = user("u", false);
        let invites = [invite(&newcomer, &user("v", true), InviteStatus::Accepted)];
        assert!(!is_eligible(&newcomer, &invites));
    }

    #[tokio::test]
    async fn test_store_backed_check() {
        let verified = user("v", true);
        let newcomer = user("u", false);
        let stranger = user("s", false);
        let repo = MemoryRepository::with_records(vec![invite(
            &verified,
            &newcomer,
            InviteStatus::Rejected,
        )]);
        let eligibility = LoginEligibility::new(Arc::new(repo));

        assert!(eligibility.is_eligible(&newcomer).await.unwrap());
        assert!(!eligibility.is_eligible(&stranger).await.unwrap());
        assert!(eligibility.is_eligible(&verified).await.unwrap());
    }
}
