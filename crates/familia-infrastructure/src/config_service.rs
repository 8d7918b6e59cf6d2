//! Configuration service implementation.
//!
//! Loads the client configuration from `config.toml` in the Familia config
//! directory, writing the defaults on first run, and applies the
//! `FAMILIA_API_URL` environment override on top.

use crate::dto::create_client_config_migrator;
use crate::paths::FamiliaPaths;
use familia_core::config::{API_URL_ENV, ClientConfig};
use familia_core::error::{FamiliaError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use version_migrate::{FileStorage, FileStorageStrategy, FormatStrategy, LoadBehavior};

const ENTITY: &str = "client_config";

/// Configuration service that loads and caches the client configuration.
///
/// The file is read once; later calls return the cached copy until
/// [`ConfigService::invalidate_cache`] is called.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service backed by the platform config directory.
    pub fn new() -> Result<Self> {
        let path = FamiliaPaths::default().config_file()?;
        Ok(Self::with_path(path))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the effective configuration, honoring `FAMILIA_API_URL`.
    pub fn get_config(&self) -> Result<ClientConfig> {
        self.load_with_override(std::env::var(API_URL_ENV).ok())
    }

    /// Returns the configuration with an explicit API URL override applied.
    pub fn load_with_override(&self, api_url: Option<String>) -> Result<ClientConfig> {
        let cached = self
            .config
            .read()
            .map_err(|e| FamiliaError::internal(format!("config cache poisoned: {}", e)))?
            .clone();

        let config = match cached {
            Some(config) => config,
            None => {
                let loaded = self.load_config()?;
                let mut write_lock = self
                    .config
                    .write()
                    .map_err(|e| FamiliaError::internal(format!("config cache poisoned: {}", e)))?;
                *write_lock = Some(loaded.clone());
                loaded
            }
        };

        Ok(config.with_api_url_override(api_url))
    }

    /// Persists a configuration and refreshes the cache.
    pub fn save_config(&self, config: &ClientConfig) -> Result<()> {
        let mut storage = self.open_storage()?;
        storage.update_and_save(ENTITY, vec![config.clone()])?;

        let mut write_lock = self
            .config
            .write()
            .map_err(|e| FamiliaError::internal(format!("config cache poisoned: {}", e)))?;
        *write_lock = Some(config.clone());
        tracing::debug!(path = %self.path.display(), "Saved client config");
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    fn load_config(&self) -> Result<ClientConfig> {
        let mut storage = self.open_storage()?;
        let configs: Vec<ClientConfig> = storage.query(ENTITY)?;

        match configs.into_iter().next() {
            Some(config) => Ok(config),
            None => {
                let default_config = ClientConfig::default();
                storage.update_and_save(ENTITY, vec![default_config.clone()])?;
                tracing::info!(path = %self.path.display(), "Created default client config");
                Ok(default_config)
            }
        }
    }

    fn open_storage(&self) -> Result<FileStorage> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let strategy = FileStorageStrategy::new()
            .with_format(FormatStrategy::Toml)
            .with_load_behavior(LoadBehavior::CreateIfMissing);

        Ok(FileStorage::new(
            self.path.clone(),
            create_client_config_migrator(),
            strategy,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_run_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = service.load_with_override(None).unwrap();

        assert_eq!(config, ClientConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_saved_config_survives_new_service() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut custom = ClientConfig::default();
        custom.chat_history_limit = 20;
        custom.quick_match.max_attempts = 4;
        ConfigService::with_path(&path).save_config(&custom).unwrap();

        let reloaded = ConfigService::with_path(&path)
            .load_with_override(None)
            .unwrap();
        assert_eq!(reloaded, custom);
    }

    #[test]
    fn test_env_style_override_is_not_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let overridden = service
            .load_with_override(Some("https://staging.familia.app/api/v1".into()))
            .unwrap();
        assert_eq!(overridden.api_base_url, "https://staging.familia.app/api/v1");

        service.invalidate_cache();
        let plain = service.load_with_override(None).unwrap();
        assert_eq!(plain.api_base_url, ClientConfig::default().api_base_url);
    }

    #[test]
    fn test_nested_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("familia").join("config.toml");
        let service = ConfigService::with_path(&path);

        assert!(service.load_with_override(None).is_ok());
        assert!(path.exists());
    }
}
