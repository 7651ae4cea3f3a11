//! Wiring of stores and services for one CLI invocation.

use std::sync::Arc;

use invitehub_auth::{Argon2Hasher, LoginEligibility};
use invitehub_core::config::AppConfig;
use invitehub_core::error::AppError;
use invitehub_database::{MemoryRepository, MemoryUserDirectory, snapshot};
use invitehub_entity::invite::Invite;
use invitehub_entity::user::User;
use invitehub_service::{AuthService, InviteService, UserService};

/// Services built over snapshot-loaded stores.
pub struct App {
    config: AppConfig,
    invites: Arc<MemoryRepository<Invite>>,
    /// Invite lifecycle.
    pub invite_service: InviteService,
    /// User search.
    pub user_service: UserService,
    /// Login checks.
    pub auth_service: AuthService,
}

impl App {
    /// Load both snapshots and wire the services.
    pub async fn load(config: AppConfig) -> Result<Self, AppError> {
        let users: Vec<User> = snapshot::load(&config.store.users_path).await?;
        let invites: Vec<Invite> = snapshot::load(&config.store.invites_path).await?;

        let invites = Arc::new(MemoryRepository::with_records(invites));
        let directory = Arc::new(MemoryUserDirectory::new(users));

        let invite_service =
            InviteService::new(invites.clone(), directory.clone(), &config.invites);
        let user_service = UserService::new(directory.clone());
        let auth_service = AuthService::new(
            directory,
            Arc::new(Argon2Hasher::new()),
            LoginEligibility::new(invites.clone()),
        );

        Ok(Self {
            config,
            invites,
            invite_service,
            user_service,
            auth_service,
        })
    }

    /// Page size used when a command does not give one.
    pub fn default_page_size(&self) -> u64 {
        self.config.invites.default_page_size
    }

    /// Write the invite store back to its snapshot, if configured to.
    pub async fn persist(&self) -> Result<(), AppError> {
        if !self.config.store.persist {
            tracing::debug!("Persistence disabled, invite snapshot left untouched");
            return Ok(());
        }
        let records = self.invites.snapshot().await;
        snapshot::save(&self.config.store.invites_path, &records).await
    }
}
