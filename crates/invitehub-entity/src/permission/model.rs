//! Permission set and partial permission updates.

use serde::{Deserialize, Serialize};

use super::capability::{Access, Capability, ResourceCategory};

/// Six capability flags in three read/write pairs.
///
/// A consistent set never has a write flag without its read flag; see
/// [`super::dependency`] for the rules that keep it that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionSet {
    /// Read posts.
    pub read_posts: bool,
    /// Write posts.
    pub write_posts: bool,
    /// Read messages.
    pub read_messages: bool,
    /// Write messages.
    pub write_messages: bool,
    /// Read the profile.
    pub read_profile: bool,
    /// Write the profile.
    pub write_profile: bool,
}

impl PermissionSet {
    /// A set with every flag granted.
    pub fn all() -> Self {
        Self {
            read_posts: true,
            write_posts: true,
            read_messages: true,
            write_messages: true,
            read_profile: true,
            write_profile: true,
        }
    }

    /// Read a single flag.
    pub fn get(&self, capability: Capability) -> bool {
        match capability {
            Capability::ReadPosts => self.read_posts,
            Capability::WritePosts => self.write_posts,
            Capability::ReadMessages => self.read_messages,
            Capability::WriteMessages => self.write_messages,
            Capability::ReadProfile => self.read_profile,
            Capability::WriteProfile => self.write_profile,
        }
    }

    /// Overwrite a single flag without applying dependency rules.
    pub fn set(&mut self, capability: Capability, value: bool) {
        let slot = match capability {
            Capability::ReadPosts => &mut self.read_posts,
            Capability::WritePosts => &mut self.write_posts,
            Capability::ReadMessages => &mut self.read_messages,
            Capability::WriteMessages => &mut self.write_messages,
            Capability::ReadProfile => &mut self.read_profile,
            Capability::WriteProfile => &mut self.write_profile,
        };
        *slot = value;
    }

    /// The `(read, write)` flags of one category.
    pub fn pair(&self, category: ResourceCategory) -> (bool, bool) {
        (
            self.get(Capability::new(category, Access::Read)),
            self.get(Capability::new(category, Access::Write)),
        )
    }

    /// Whether every write flag is backed by its read flag.
    pub fn is_consistent(&self) -> bool {
        ResourceCategory::ALL.into_iter().all(|category| {
            let (read, write) = self.pair(category);
            read || !write
        })
    }

    /// Granted capabilities, in display order.
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.get(*cap))
            .collect()
    }
}

/// A partial update: only the keys that are present are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PermissionPatch {
    /// Read posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_posts: Option<bool>,
    /// Write posts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_posts: Option<bool>,
    /// Read messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_messages: Option<bool>,
    /// Write messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_messages: Option<bool>,
    /// Read the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_profile: Option<bool>,
    /// Write the profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_profile: Option<bool>,
}

impl PermissionPatch {
    /// The value this patch writes for `capability`, if any.
    pub fn get(&self, capability: Capability) -> Option<bool> {
        match capability {
            Capability::ReadPosts => self.read_posts,
            Capability::WritePosts => self.write_posts,
            Capability::ReadMessages => self.read_messages,
            Capability::WriteMessages => self.write_messages,
            Capability::ReadProfile => self.read_profile,
            Capability::WriteProfile => self.write_profile,
        }
    }

    /// Set the value this patch writes for `capability`.
    pub fn with(mut self, capability: Capability, value: bool) -> Self {
        let slot = match capability {
            Capability::ReadPosts => &mut self.read_posts,
            Capability::WritePosts => &mut self.write_posts,
            Capability::ReadMessages => &mut self.read_messages,
            Capability::WriteMessages => &mut self.write_messages,
            Capability::ReadProfile => &mut self.read_profile,
            Capability::WriteProfile => &mut self.write_profile,
        };
        *slot = Some(value);
        self
    }

    /// Whether no key is present.
    pub fn is_empty(&self) -> bool {
        Capability::ALL.into_iter().all(|cap| self.get(cap).is_none())
    }

    /// Shallow per-key merge over `base`.
    pub fn merge_into(&self, base: &PermissionSet) -> PermissionSet {
        let mut merged = *base;
        for cap in Capability::ALL {
            if let Some(value) = self.get(cap) {
                merged.set(cap, value);
            }
        }
        merged
    }
}

impl From<PermissionSet> for PermissionPatch {
    fn from(set: PermissionSet) -> Self {
        Capability::ALL
            .into_iter()
            .fold(Self::default(), |patch, cap| patch.with(cap, set.get(cap)))
    }
}
