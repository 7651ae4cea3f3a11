//! Generic repository trait for record storage.

use std::fmt::Display;
use std::hash::Hash;

use async_trait::async_trait;

use crate::result::AppResult;

/// A storable record with an identity and an optimistic-concurrency version.
///
/// The version is owned by the repository: it is set on append and
/// incremented on every successful update. Callers only carry the version
/// they read back into [`Repository::update`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier type.
    type Id: Clone + Eq + Hash + Display + Send + Sync + 'static;

    /// The record's identity.
    fn id(&self) -> &Self::Id;

    /// The version this copy was read at.
    fn version(&self) -> u64;

    /// Overwrite the version. Only repositories call this.
    fn set_version(&mut self, version: u64);
}

/// Record storage with append, lookup, versioned update, and ordered scan.
///
/// Implementations must preserve insertion order in [`Repository::scan`].
#[async_trait]
pub trait Repository<Entity>: Send + Sync + 'static
where
    Entity: Record,
{
    /// Find a record by its identifier.
    async fn find_by_id(&self, id: &Entity::Id) -> AppResult<Option<Entity>>;

    /// Append a new record and return the stored copy.
    ///
    /// Fails with a conflict if a record with the same id already exists.
    async fn append(&self, entity: Entity) -> AppResult<Entity>;

    /// Replace a record in place and return the stored copy.
    ///
    /// `entity.version()` must equal the stored version, otherwise the
    /// write is refused with a conflict. Fails with not-found for unknown ids.
    async fn update(&self, entity: Entity) -> AppResult<Entity>;

    /// Return every record matching `predicate`, in insertion order.
    async fn scan(
        &self,
        predicate: &(dyn for<'a> Fn(&'a Entity) -> bool + Send + Sync),
    ) -> AppResult<Vec<Entity>>;

    /// Count all stored records.
    async fn count(&self) -> AppResult<u64>;
}
