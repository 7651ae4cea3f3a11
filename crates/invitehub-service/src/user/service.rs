//! User search.

use std::sync::Arc;

use tracing::debug;

use invitehub_core::error::AppError;
use invitehub_database::UserDirectory;
use invitehub_entity::user::UserSummary;

/// Finds users to invite.
#[derive(Clone)]
pub struct UserService {
    /// User directory.
    users: Arc<dyn UserDirectory>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }

    /// Users whose email or username contains `query`, ignoring case.
    ///
    /// Results keep directory order and never carry credentials. An empty
    /// query matches everyone.
    pub async fn search(&self, query: &str) -> Result<Vec<UserSummary>, AppError> {
        let needle = query.to_lowercase();
        let matches: Vec<UserSummary> = self
            .users
            .list()
            .await?
            .iter()
            .filter(|user| {
                user.email.to_lowercase().contains(&needle)
                    || user.username.to_lowercase().contains(&needle)
            })
            .map(UserSummary::from)
            .collect();

        debug!(query = %query, matches = matches.len(), "User search");
        Ok(matches)
    }
}
