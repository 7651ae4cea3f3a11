//! Invite creation, transitions, permission edits, and listing.

use std::sync::Arc;

use tracing::{debug, info, warn};

use invitehub_core::config::InviteConfig;
use invitehub_core::error::AppError;
use invitehub_core::traits::Repository;
use invitehub_core::types::InviteId;
use invitehub_core::types::pagination::{PageRequest, PageResponse};
use invitehub_database::UserDirectory;
use invitehub_entity::invite::{Invite, InviteAction, InviteRole, InviteStatus};
use invitehub_entity::permission::{Capability, PermissionPatch};
use invitehub_entity::user::User;

use super::policy::TransitionPolicy;
use super::request::SendInviteRequest;

/// Manages the invite lifecycle.
///
/// Every entry point that writes permissions normalizes them first, so the
/// store never holds a write flag without its read flag.
#[derive(Clone)]
pub struct InviteService {
    /// Invite store.
    invites: Arc<dyn Repository<Invite>>,
    /// User directory.
    users: Arc<dyn UserDirectory>,
    /// Accept/reject policy.
    policy: TransitionPolicy,
}

impl InviteService {
    /// Creates a new invite service.
    pub fn new(
        invites: Arc<dyn Repository<Invite>>,
        users: Arc<dyn UserDirectory>,
        config: &InviteConfig,
    ) -> Self {
        Self {
            invites,
            users,
            policy: TransitionPolicy::new(config.transition_mode),
        }
    }

    /// Sends a new pending invite from one user to another.
    ///
    /// Fails with not-found if either email is unknown; nothing is stored in
    /// that case.
    pub async fn create(&self, req: SendInviteRequest) -> Result<Invite, AppError> {
        let inviter = self.user_by_email(&req.inviter_email, "Inviter").await?;
        let invitee = self.user_by_email(&req.invitee_email, "Invitee").await?;

        if inviter.id == invitee.id {
            return Err(AppError::validation("Users cannot invite themselves"));
        }

        let invite = Invite::new(
            inviter.summary(),
            invitee.summary(),
            req.permissions.resolved(),
        );
        let invite = self.invites.append(invite).await?;

        info!(
            invite_id = %invite.id,
            inviter = %invite.inviter.email,
            invitee = %invite.invitee.email,
            "Invite sent"
        );

        Ok(invite)
    }

    /// Gets an invite by id.
    pub async fn get(&self, invite_id: &InviteId) -> Result<Invite, AppError> {
        self.invites.find_by_id(invite_id).await?.ok_or_else(|| {
            warn!(invite_id = %invite_id, "Invite lookup failed");
            AppError::not_found(format!("Invite with id {invite_id} not found"))
        })
    }

    /// Accepts or rejects an invite on behalf of the invitee.
    ///
    /// Whether a terminal invite may be transitioned again is decided by the
    /// configured [`TransitionPolicy`].
    pub async fn transition(
        &self,
        invite_id: &InviteId,
        action: InviteAction,
    ) -> Result<Invite, AppError> {
        let mut invite = self.get(invite_id).await?;
        self.policy.check(invite.status, action)?;

        let previous = invite.status;
        invite.status = action.target_status();
        let invite = self.invites.update(invite).await?;

        info!(
            invite_id = %invite.id,
            action = %action,
            from = %previous,
            to = %invite.status,
            "Invite transitioned"
        );

        Ok(invite)
    }

    /// Deletes an invite on behalf of the inviter.
    ///
    /// The record is kept and forced to `rejected` regardless of the
    /// transition policy.
    pub async fn delete(&self, invite_id: &InviteId) -> Result<Invite, AppError> {
        let mut invite = self.get(invite_id).await?;
        let previous = invite.status;
        invite.status = InviteStatus::Rejected;
        let invite = self.invites.update(invite).await?;

        info!(invite_id = %invite.id, from = %previous, "Invite deleted");

        Ok(invite)
    }

    /// Merges `patch` into the invite's permissions and normalizes the result.
    pub async fn update_permissions(
        &self,
        invite_id: &InviteId,
        patch: PermissionPatch,
    ) -> Result<Invite, AppError> {
        let mut invite = self.get(invite_id).await?;
        invite.permissions = invite.permissions.patched(&patch);
        let invite = self.invites.update(invite).await?;

        info!(
            invite_id = %invite.id,
            granted = ?invite.permissions.granted(),
            "Invite permissions updated"
        );

        Ok(invite)
    }

    /// Flips one capability on the invite, applying the dependency rules.
    pub async fn toggle_permission(
        &self,
        invite_id: &InviteId,
        capability: Capability,
    ) -> Result<Invite, AppError> {
        let mut invite = self.get(invite_id).await?;
        invite.permissions = invite.permissions.toggle(capability);
        let invite = self.invites.update(invite).await?;

        info!(
            invite_id = %invite.id,
            capability = %capability,
            granted = ?invite.permissions.granted(),
            "Invite permission toggled"
        );

        Ok(invite)
    }

    /// Lists invites where `email` is on the given side, in insertion order.
    ///
    /// A page past the end, or page 0, is empty. Only a zero page size is
    /// refused.
    pub async fn list_for(
        &self,
        email: &str,
        role: InviteRole,
        page: &PageRequest,
    ) -> Result<PageResponse<Invite>, AppError> {
        page.validate()?;

        let matching = self
            .invites
            .scan(&|invite: &Invite| invite.involves(email, role))
            .await?;

        debug!(
            email = %email,
            role = %role,
            page = page.page,
            matching = matching.len(),
            "Listing invites"
        );

        Ok(PageResponse::paginate(matching, page))
    }

    /// Every invite received by `email`, unpaginated.
    pub async fn received_by(&self, email: &str) -> Result<Vec<Invite>, AppError> {
        self.invites
            .scan(&|invite: &Invite| invite.involves(email, InviteRole::Invitee))
            .await
    }

    async fn user_by_email(&self, email: &str, side: &str) -> Result<User, AppError> {
        self.users.find_by_email(email).await?.ok_or_else(|| {
            warn!(email = %email, side = %side, "Invite participant not found");
            AppError::not_found(format!("{side} with email {email} not found"))
        })
    }
}
