//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use invitehub_auth::{LoginEligibility, PasswordHasher};
use invitehub_core::config::{InviteConfig, TransitionMode};
use invitehub_core::error::AppError;
use invitehub_core::traits::Repository;
use invitehub_core::types::UserId;
use invitehub_database::{MemoryRepository, MemoryUserDirectory};
use invitehub_entity::invite::Invite;
use invitehub_entity::permission::PermissionSet;
use invitehub_entity::user::User;
use invitehub_service::{AuthService, InviteService, SendInviteRequest, UserService};

/// Stores credentials as `plain:<password>` so tests skip Argon2's cost.
#[derive(Debug, Default)]
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        Ok(format!("plain:{password}"))
    }

    fn verify(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        stored
            .strip_prefix("plain:")
            .map(|expected| expected == password)
            .ok_or_else(|| AppError::internal("Invalid password hash format"))
    }
}

/// Services wired over in-memory stores.
pub struct TestApp {
    /// Invite store, shared with the services.
    pub invites: Arc<MemoryRepository<Invite>>,
    /// Invite service.
    pub invite_service: InviteService,
    /// User service.
    pub user_service: UserService,
    /// Auth service.
    pub auth_service: AuthService,
}

impl TestApp {
    /// Permissive app over the standard cast of users.
    pub fn new() -> Self {
        Self::with_mode(TransitionMode::Permissive)
    }

    /// App over the standard cast with the given transition mode.
    pub fn with_mode(mode: TransitionMode) -> Self {
        Self::build(cast(), Vec::new(), mode, Arc::new(PlainHasher))
    }

    /// Fully custom app.
    pub fn build(
        users: Vec<User>,
        invites: Vec<Invite>,
        mode: TransitionMode,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let config = InviteConfig {
            transition_mode: mode,
            ..InviteConfig::default()
        };
        let invites = Arc::new(MemoryRepository::with_records(invites));
        let directory = Arc::new(MemoryUserDirectory::new(users));

        let invite_service = InviteService::new(invites.clone(), directory.clone(), &config);
        let user_service = UserService::new(directory.clone());
        let auth_service = AuthService::new(
            directory,
            hasher,
            LoginEligibility::new(invites.clone()),
        );

        Self {
            invites,
            invite_service,
            user_service,
            auth_service,
        }
    }

    /// Sends an invite that is expected to succeed.
    pub async fn send(&self, from: &str, to: &str, permissions: PermissionSet) -> Invite {
        self.invite_service
            .create(SendInviteRequest::new(from, to, permissions))
            .await
            .expect("invite should be created")
    }

    /// Number of stored invites.
    pub async fn invite_count(&self) -> u64 {
        self.invites.count().await.expect("count")
    }
}

/// A user whose password is `password` under [`PlainHasher`].
pub fn user(id: &str, username: &str, email: &str, verified: bool) -> User {
    User {
        id: UserId::from(id),
        username: username.to_string(),
        email: email.to_string(),
        is_verified: verified,
        password_hash: "plain:password".to_string(),
    }
}

/// Ana and Carla are verified; Bo and Dee are not.
pub fn cast() -> Vec<User> {
    vec![
        user("1", "ana", "ana@example.com", true),
        user("2", "bo", "bo@example.com", false),
        user("3", "carla", "carla@example.com", true),
        user("4", "dee", "dee@example.com", false),
    ]
}
