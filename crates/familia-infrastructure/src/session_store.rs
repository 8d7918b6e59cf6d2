//! File-backed session snapshot repository.
//!
//! Persists the warm-start [`SessionSnapshot`] to `session.toml` so the
//! client can resume without signing in again.

use crate::dto::create_session_snapshot_migrator;
use crate::paths::FamiliaPaths;
use async_trait::async_trait;
use familia_core::error::{FamiliaError, Result};
use familia_core::session_store::{SessionRepository, SessionSnapshot};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

const ENTITY: &str = "session";

/// Session repository backed by a TOML file.
///
/// Keeps the last snapshot in memory; writes go through
/// `spawn_blocking` so callers never block the runtime on file I/O.
#[derive(Clone)]
pub struct SessionStore {
    snapshot: Arc<Mutex<SessionSnapshot>>,
    storage: Arc<Mutex<FileStorage>>,
}

impl SessionStore {
    /// Opens the store in the platform config directory.
    pub async fn new() -> Result<Self> {
        let path = FamiliaPaths::default().session_file()?;
        Self::with_path(path).await
    }

    /// Opens the store at an explicit file path, creating it if missing.
    pub async fn with_path(path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Toml)
            .with_load_behavior(LoadBehavior::CreateIfMissing);
        let storage = FileStorage::new(file_path, create_session_snapshot_migrator(), strategy)?;

        let initial = {
            let snapshots: Vec<SessionSnapshot> = storage.query(ENTITY)?;
            snapshots.into_iter().next().unwrap_or_default()
        };

        Ok(Self {
            snapshot: Arc::new(Mutex::new(initial)),
            storage: Arc::new(Mutex::new(storage)),
        })
    }

    async fn persist(&self, snapshot: SessionSnapshot) -> Result<()> {
        {
            let mut cached = self.snapshot.lock().await;
            *cached = snapshot.clone();
        }

        let storage = self.storage.clone();
        tokio::task::spawn_blocking(move || {
            let mut storage = storage.blocking_lock();
            storage
                .update_and_save(ENTITY, vec![snapshot])
                .map_err(|e| FamiliaError::internal(format!("Failed to save session: {}", e)))
        })
        .await
        .map_err(|e| FamiliaError::internal(format!("Failed to join task: {}", e)))??;

        Ok(())
    }
}

#[async_trait]
impl SessionRepository for SessionStore {
    async fn load(&self) -> Result<SessionSnapshot> {
        Ok(self.snapshot.lock().await.clone())
    }

    async fn save(&self, snapshot: SessionSnapshot) -> Result<()> {
        tracing::debug!(signed_in = snapshot.is_signed_in(), "Saving session snapshot");
        self.persist(snapshot).await
    }

    async fn clear(&self) -> Result<()> {
        tracing::debug!("Clearing session snapshot");
        self.persist(SessionSnapshot::default()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use familia_core::profile::Profile;
    use tempfile::TempDir;

    fn profile() -> Profile {
        serde_json::from_value(serde_json::json!({
            "id": "u-1",
            "username": "ana",
            "display_name": "Ana",
            "country": "BR",
            "care_score": 4.5,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_fresh_store_is_signed_out() {
        let temp_dir = TempDir::new().unwrap();
        let store = SessionStore::with_path(temp_dir.path().join("session.toml"))
            .await
            .unwrap();

        let snapshot = store.load().await.unwrap();
        assert!(!snapshot.is_signed_in());
    }

    #[tokio::test]
    async fn test_snapshot_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let store = SessionStore::with_path(&path).await.unwrap();
        store
            .save(SessionSnapshot::new("tok-1", "u-1").with_profile(profile()))
            .await
            .unwrap();
        drop(store);

        let reopened = SessionStore::with_path(&path).await.unwrap();
        let snapshot = reopened.load().await.unwrap();
        assert_eq!(snapshot.token.as_deref(), Some("tok-1"));
        assert_eq!(snapshot.profile.unwrap().display_name, "Ana");
    }

    #[tokio::test]
    async fn test_clear_signs_out_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let store = SessionStore::with_path(&path).await.unwrap();
        store.save(SessionSnapshot::new("tok-1", "u-1")).await.unwrap();
        store.clear().await.unwrap();

        let reopened = SessionStore::with_path(&path).await.unwrap();
        assert_eq!(reopened.load().await.unwrap(), SessionSnapshot::default());
    }
}
