//! JSON snapshot files for the user directory and invite store.
//!
//! A snapshot is a JSON array of records. A missing file is an empty
//! snapshot. Saves go through a temporary sibling file and a rename so a
//! failed write never truncates the previous snapshot.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use invitehub_core::error::{AppError, ErrorKind};
use invitehub_core::result::AppResult;

/// Load every record from the snapshot at `path`.
pub async fn load<T: DeserializeOwned>(path: impl AsRef<Path>) -> AppResult<Vec<T>> {
    let path = path.as_ref();
    let raw = match tokio::fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "Snapshot not found, starting empty");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read snapshot '{}'", path.display()),
                e,
            ));
        }
    };

    let records: Vec<T> = serde_json::from_slice(&raw).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("Malformed snapshot '{}': {e}", path.display()),
            e,
        )
    })?;

    info!(path = %path.display(), records = records.len(), "Snapshot loaded");
    Ok(records)
}

/// Replace the snapshot at `path` with `records`.
pub async fn save<T: Serialize>(path: impl AsRef<Path>, records: &[T]) -> AppResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let body = serde_json::to_vec_pretty(records)?;
    let staging = path.with_extension("json.tmp");
    tokio::fs::write(&staging, body).await?;
    tokio::fs::rename(&staging, path).await?;

    info!(path = %path.display(), records = records.len(), "Snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invitehub_core::types::UserId;
    use invitehub_entity::invite::{Invite, InviteStatus};
    use invitehub_entity::permission::PermissionSet;
    use invitehub_entity::user::{User, UserSummary};

    fn scratch(name: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("invitehub-snapshot-{}", std::process::id()))
            .join(name)
    }

    fn summary(id: &str, verified: bool) -> UserSummary {
        UserSummary {
            id: UserId::from(id),
            username: id.to_string(),
            email: format!("{id}@x.io"),
            is_verified: verified,
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let records: Vec<Invite> = load(scratch("absent.json")).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_invites() {
        let path = scratch("invites.json");
        let mut invite = Invite::new(summary("a", true), summary("b", false), PermissionSet::all());
        invite.status = InviteStatus::Accepted;

        save(&path, std::slice::from_ref(&invite)).await.unwrap();
        let loaded: Vec<Invite> = load(&path).await.unwrap();

        assert_eq!(loaded, vec![invite]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_users_load_with_credentials() {
        let path = scratch("users.json");
        let raw = r#"[{"id":"1","username":"ana","email":"ana@x.io","isVerified":false,"password":"h1"}]"#;
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, raw).await.unwrap();

        let users: Vec<User> = load(&path).await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].password_hash, "h1");
    }

    #[tokio::test]
    async fn test_malformed_snapshot_is_serialization_error() {
        let path = scratch("broken.json");
        tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
        tokio::fs::write(&path, b"{not json").await.unwrap();

        let err = load::<Invite>(&path).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
