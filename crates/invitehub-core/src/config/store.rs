//! Snapshot store configuration.

use serde::{Deserialize, Serialize};

/// Where the user directory and invite store are loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the users JSON snapshot.
    #[serde(default = "default_users_path")]
    pub users_path: String,
    /// Path to the invites JSON snapshot.
    #[serde(default = "default_invites_path")]
    pub invites_path: String,
    /// Write the invite store back to `invites_path` after each mutation.
    #[serde(default = "default_true")]
    pub persist: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            users_path: default_users_path(),
            invites_path: default_invites_path(),
            persist: true,
        }
    }
}

fn default_users_path() -> String {
    "data/users.json".to_string()
}

fn default_invites_path() -> String {
    "data/invites.json".to_string()
}

fn default_true() -> bool {
    true
}
