//! Read/write dependency rules.
//!
//! Within each category write access requires read access. Granting write
//! pulls read up with it; revoking read takes write down with it. Categories
//! never affect each other, so every rule only looks at one pair.

use super::capability::{Access, Capability, ResourceCategory};
use super::model::{PermissionPatch, PermissionSet};

/// Flip `toggled` and repair its pair.
///
/// Turning a write flag on also turns its read flag on. Turning a read flag
/// off also turns its write flag off. Pairs the toggle did not touch are
/// passed through [`resolve`].
pub fn apply_toggle(current: &PermissionSet, toggled: Capability) -> PermissionSet {
    let mut next = *current;
    next.set(toggled, !current.get(toggled));

    let category = toggled.category();
    let (read, write) = next.pair(category);
    if write && !read {
        match toggled.access() {
            Access::Write => next.set(Capability::new(category, Access::Read), true),
            Access::Read => next.set(Capability::new(category, Access::Write), false),
        }
    }

    resolve(&next)
}

/// Make a set consistent by raising read wherever write is set.
///
/// Consistent sets are returned unchanged, so `resolve(&resolve(p)) ==
/// resolve(p)`.
pub fn resolve(set: &PermissionSet) -> PermissionSet {
    let mut resolved = *set;
    for category in ResourceCategory::ALL {
        let (read, write) = resolved.pair(category);
        if write && !read {
            resolved.set(Capability::new(category, Access::Read), true);
        }
    }
    resolved
}

/// Merge `patch` over `current` and repair every pair it left inconsistent.
///
/// A read flag explicitly revoked by the patch wins over a write flag that is
/// still set, so the write flag is dropped. Otherwise write wins and read is
/// raised.
pub fn apply_patch(current: &PermissionSet, patch: &PermissionPatch) -> PermissionSet {
    let mut merged = patch.merge_into(current);
    for category in ResourceCategory::ALL {
        let (read, write) = merged.pair(category);
        if !write || read {
            continue;
        }
        let read_key = Capability::new(category, Access::Read);
        if patch.get(read_key) == Some(false) {
            merged.set(Capability::new(category, Access::Write), false);
        } else {
            merged.set(read_key, true);
        }
    }
    merged
}

impl PermissionSet {
    /// See [`apply_toggle`].
    pub fn toggle(&self, capability: Capability) -> Self {
        apply_toggle(self, capability)
    }

    /// See [`resolve`].
    pub fn resolved(&self) -> Self {
        resolve(self)
    }

    /// See [`apply_patch`].
    pub fn patched(&self, patch: &PermissionPatch) -> Self {
        apply_patch(self, patch)
    }
}
