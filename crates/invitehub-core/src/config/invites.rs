//! Invite listing and lifecycle configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// How status transitions out of a terminal state are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitionMode {
    /// Accept and reject always apply, even to accepted or rejected invites.
    #[default]
    Permissive,
    /// Only pending invites may be accepted or rejected.
    Strict,
}

/// Invite settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InviteConfig {
    /// Page size used when the caller does not give one.
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE))]
    pub default_page_size: u64,
    /// Transition policy for terminal invites.
    #[serde(default)]
    pub transition_mode: TransitionMode,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            transition_mode: TransitionMode::default(),
        }
    }
}

fn default_page_size() -> u64 {
    DEFAULT_PAGE_SIZE
}
