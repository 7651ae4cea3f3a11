//! Capability keys and their decomposition into category and access level.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use invitehub_core::AppError;

/// Resource category a capability pair governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    /// Posts.
    Posts,
    /// Direct messages.
    Messages,
    /// The user's profile.
    Profile,
}

impl ResourceCategory {
    /// All categories, in display order.
    pub const ALL: [ResourceCategory; 3] = [Self::Posts, Self::Messages, Self::Profile];
}

/// Access level within a category. Write requires read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    /// View the resource.
    Read,
    /// Modify the resource.
    Write,
}

/// One of the six toggleable capability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    /// Read posts.
    ReadPosts,
    /// Write posts.
    WritePosts,
    /// Read messages.
    ReadMessages,
    /// Write messages.
    WriteMessages,
    /// Read the profile.
    ReadProfile,
    /// Write the profile.
    WriteProfile,
}

impl Capability {
    /// All capabilities, in display order.
    pub const ALL: [Capability; 6] = [
        Self::ReadPosts,
        Self::WritePosts,
        Self::ReadMessages,
        Self::WriteMessages,
        Self::ReadProfile,
        Self::WriteProfile,
    ];

    /// Build the capability for a category and access level.
    pub fn new(category: ResourceCategory, access: Access) -> Self {
        match (category, access) {
            (ResourceCategory::Posts, Access::Read) => Self::ReadPosts,
            (ResourceCategory::Posts, Access::Write) => Self::WritePosts,
            (ResourceCategory::Messages, Access::Read) => Self::ReadMessages,
            (ResourceCategory::Messages, Access::Write) => Self::WriteMessages,
            (ResourceCategory::Profile, Access::Read) => Self::ReadProfile,
            (ResourceCategory::Profile, Access::Write) => Self::WriteProfile,
        }
    }

    /// The category this capability belongs to.
    pub fn category(&self) -> ResourceCategory {
        match self {
            Self::ReadPosts | Self::WritePosts => ResourceCategory::Posts,
            Self::ReadMessages | Self::WriteMessages => ResourceCategory::Messages,
            Self::ReadProfile | Self::WriteProfile => ResourceCategory::Profile,
        }
    }

    /// The access level this capability grants.
    pub fn access(&self) -> Access {
        match self {
            Self::ReadPosts | Self::ReadMessages | Self::ReadProfile => Access::Read,
            Self::WritePosts | Self::WriteMessages | Self::WriteProfile => Access::Write,
        }
    }

    /// The other half of this capability's pair.
    pub fn counterpart(&self) -> Self {
        let access = match self.access() {
            Access::Read => Access::Write,
            Access::Write => Access::Read,
        };
        Self::new(self.category(), access)
    }

    /// Return the key as used in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ReadPosts => "readPosts",
            Self::WritePosts => "writePosts",
            Self::ReadMessages => "readMessages",
            Self::WriteMessages => "writeMessages",
            Self::ReadProfile => "readProfile",
            Self::WriteProfile => "writeProfile",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Capability {
    type Err = AppError;

    /// Accepts the snapshot key (`readPosts`) or its snake_case form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s.chars().filter(|c| *c != '_').collect();
        Self::ALL
            .into_iter()
            .find(|cap| cap.as_str().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid capability: '{s}'. Expected one of: readPosts, writePosts, \
                     readMessages, writeMessages, readProfile, writeProfile"
                ))
            })
    }
}
