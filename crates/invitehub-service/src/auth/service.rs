//! Credential and eligibility checks for sign-in.

use std::sync::Arc;

use tracing::{info, warn};

use invitehub_auth::{LoginEligibility, PasswordHasher};
use invitehub_core::error::AppError;
use invitehub_database::UserDirectory;
use invitehub_entity::user::{User, UserSummary};

/// Decides whether a user may sign in. Issuing a session is left to the
/// caller.
#[derive(Clone)]
pub struct AuthService {
    /// User directory.
    users: Arc<dyn UserDirectory>,
    /// Credential hasher.
    hasher: Arc<dyn PasswordHasher>,
    /// Invite-based fallback for unverified users.
    eligibility: LoginEligibility,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserDirectory>,
        hasher: Arc<dyn PasswordHasher>,
        eligibility: LoginEligibility,
    ) -> Self {
        Self {
            users,
            hasher,
            eligibility,
        }
    }

    /// Checks credentials and eligibility, in that order.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary, AppError> {
        let user = self.users.find_by_email(email).await?.ok_or_else(|| {
            warn!(email = %email, "Login for unknown user");
            AppError::authentication("User not found")
        })?;

        if !self.hasher.verify(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login with incorrect password");
            return Err(AppError::authentication("Incorrect password"));
        }

        if !self.eligibility.is_eligible(&user).await? {
            warn!(user_id = %user.id, "Login refused for unverified user");
            return Err(AppError::authentication(
                "User is not verified and has no invites from verified users",
            ));
        }

        info!(user_id = %user.id, verified = user.is_verified, "Login accepted");
        Ok(user.summary())
    }

    /// Whether the user behind `email` may sign in, ignoring credentials.
    pub async fn is_eligible(&self, email: &str) -> Result<bool, AppError> {
        let user = self.user(email).await?;
        self.eligibility.is_eligible(&user).await
    }

    async fn user(&self, email: &str) -> Result<User, AppError> {
        self.users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User with email {email} not found")))
    }
}
