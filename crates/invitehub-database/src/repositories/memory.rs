//! In-memory repository backed by an insertion-ordered vector.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use invitehub_core::error::AppError;
use invitehub_core::result::AppResult;
use invitehub_core::traits::{Record, Repository};

/// In-memory repository guarded by a Tokio `RwLock`.
///
/// Each update holds the write lock across the version check and the write,
/// so concurrent writers to the same record cannot both succeed from the
/// same read.
#[derive(Debug, Clone)]
pub struct MemoryRepository<E> {
    /// Records in insertion order.
    records: Arc<RwLock<Vec<E>>>,
}

impl<E: Record> MemoryRepository<E> {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Creates a repository pre-filled with `records`, keeping their order.
    ///
    /// Records loaded with version 0 are bumped to 1 so that every stored
    /// record has been versioned by the repository.
    pub fn with_records(records: Vec<E>) -> Self {
        let records = records
            .into_iter()
            .map(|mut record| {
                if record.version() == 0 {
                    record.set_version(1);
                }
                record
            })
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Copy of every stored record, in insertion order.
    pub async fn snapshot(&self) -> Vec<E> {
        self.records.read().await.clone()
    }
}

impl<E: Record> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Record> Repository<E> for MemoryRepository<E> {
    async fn find_by_id(&self, id: &E::Id) -> AppResult<Option<E>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn append(&self, mut entity: E) -> AppResult<E> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == entity.id()) {
            return Err(AppError::conflict(format!(
                "Record '{}' already exists",
                entity.id()
            )));
        }
        entity.set_version(1);
        records.push(entity.clone());
        debug!(id = %entity.id(), total = records.len(), "Record appended");
        Ok(entity)
    }

    async fn update(&self, mut entity: E) -> AppResult<E> {
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id() == entity.id())
            .ok_or_else(|| AppError::not_found(format!("Record '{}' not found", entity.id())))?;

        if slot.version() != entity.version() {
            warn!(
                id = %entity.id(),
                expected = entity.version(),
                actual = slot.version(),
                "Stale write refused"
            );
            return Err(AppError::conflict(format!(
                "Record '{}' was modified concurrently (expected version {}, found {})",
                entity.id(),
                entity.version(),
                slot.version()
            )));
        }

        entity.set_version(slot.version() + 1);
        *slot = entity.clone();
        debug!(id = %entity.id(), version = entity.version(), "Record updated");
        Ok(entity)
    }

    async fn scan(
        &self,
        predicate: &(dyn for<'a> Fn(&'a E) -> bool + Send + Sync),
    ) -> AppResult<Vec<E>> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| predicate(r)).cloned().collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.records.read().await.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invitehub_core::error::ErrorKind;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: String,
        body: String,
        version: u64,
    }

    impl Record for Note {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }

        fn version(&self) -> u64 {
            self.version
        }

        fn set_version(&mut self, version: u64) {
            self.version = version;
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
            version: 0,
        }
    }

    #[tokio::test]
    async fn test_append_then_find() {
        let repo = MemoryRepository::new();
        let stored = repo.append(note("a", "hello")).await.unwrap();
        assert_eq!(stored.version, 1);
        let found = repo.find_by_id(&"a".to_string()).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn test_duplicate_append_conflicts() {
        let repo = MemoryRepository::new();
        repo.append(note("a", "one")).await.unwrap();
        let err = repo.append(note("a", "two")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_bumps_version() {
        let repo = MemoryRepository::new();
        let mut stored = repo.append(note("a", "one")).await.unwrap();
        stored.body = "two".into();
        let updated = repo.update(stored).await.unwrap();
        assert_eq!(updated.version, 2);
        assert_eq!(updated.body, "two");
    }

    #[tokio::test]
    async fn test_stale_update_is_refused() {
        let repo = MemoryRepository::new();
        let stored = repo.append(note("a", "one")).await.unwrap();

        let mut first = stored.clone();
        first.body = "first".into();
        repo.update(first).await.unwrap();

        let mut second = stored;
        second.body = "second".into();
        let err = repo.update(second).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);

        let current = repo.find_by_id(&"a".to_string()).await.unwrap().unwrap();
        assert_eq!(current.body, "first");
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo: MemoryRepository<Note> = MemoryRepository::new();
        let err = repo.update(note("ghost", "")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_scan_preserves_insertion_order() {
        let repo = MemoryRepository::with_records(vec![
            note("c", "keep"),
            note("a", "drop"),
            note("b", "keep"),
        ]);
        let kept = repo.scan(&|n: &Note| n.body == "keep").await.unwrap();
        let ids: Vec<_> = kept.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "b"]);
        assert!(kept.iter().all(|n| n.version == 1));
    }
}
