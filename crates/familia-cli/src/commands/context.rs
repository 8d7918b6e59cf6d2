//! Wires configuration, storage and the REST client together.

use anyhow::{Context, Result};
use familia_application::{AppSession, TracingToasts};
use familia_core::config::ClientConfig;
use familia_infrastructure::{ConfigService, FamiliaPaths, SessionStore};
use familia_interaction::FamiliaClient;
use std::sync::Arc;

pub struct AppContext {
    pub config: ClientConfig,
    pub client: Arc<FamiliaClient>,
    pub toasts: Arc<TracingToasts>,
    pub session: AppSession,
}

impl AppContext {
    /// Loads config and the saved session from `paths`, then restores the
    /// session against the server.
    pub async fn open(paths: &FamiliaPaths) -> Result<Self> {
        let config = ConfigService::with_path(paths.config_file()?)
            .get_config()
            .context("Failed to load config")?;
        tracing::debug!(api = %config.api_base(), "Using API");

        let client = Arc::new(FamiliaClient::new(&config)?);
        let store = SessionStore::with_path(paths.session_file()?)
            .await
            .context("Failed to open session store")?;
        let store = Arc::new(store);
        let toasts = Arc::new(TracingToasts);

        let session = AppSession::new(client.clone(), client.clone(), store, toasts.clone());
        session.restore().await?;

        Ok(Self {
            config,
            client,
            toasts,
            session,
        })
    }

    pub async fn require_sign_in(&self) -> Result<()> {
        if !self.session.is_signed_in().await {
            anyhow::bail!("Not signed in. Run `familia login` first.");
        }
        Ok(())
    }
}
