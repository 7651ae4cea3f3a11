//! User directory: read-only lookup of registered users.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use invitehub_core::result::AppResult;
use invitehub_core::types::UserId;
use invitehub_entity::user::User;

/// Read-only access to registered users.
#[async_trait]
pub trait UserDirectory: Send + Sync + 'static {
    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find a user by id.
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// Every user, in directory order.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// User directory held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    users: Arc<RwLock<Vec<User>>>,
}

impl MemoryUserDirectory {
    /// Creates a directory over `users`, keeping their order.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }
}
