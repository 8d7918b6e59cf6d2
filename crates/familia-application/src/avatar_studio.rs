//! Avatar editing use case.
//!
//! Edits stay local until an explicit save, which replaces the whole stored
//! config in one call. A failed save leaves the edits in place as unsaved
//! changes; it is never retried automatically.

use crate::toast::ToastSink;
use familia_core::avatar::{AvatarConfig, AvatarField, AvatarImage, render};
use familia_core::error::Result;
use familia_core::gateway::ProfileGateway;
use familia_core::profile::Profile;
use rand::Rng;
use std::sync::Arc;

pub struct AvatarStudio {
    profiles: Arc<dyn ProfileGateway>,
    toasts: Arc<dyn ToastSink>,
    user_id: String,
    saved: AvatarConfig,
    current: AvatarConfig,
}

impl AvatarStudio {
    /// Opens the studio on the member's saved avatar, or the default one.
    pub fn open(
        profiles: Arc<dyn ProfileGateway>,
        toasts: Arc<dyn ToastSink>,
        profile: &Profile,
    ) -> Self {
        let saved = profile.avatar();
        let stale = saved.validate();
        if !stale.is_empty() {
            tracing::warn!(user_id = %profile.id, ?stale, "Saved avatar has values outside the catalog");
        }

        Self {
            profiles,
            toasts,
            user_id: profile.id.clone(),
            current: saved.clone(),
            saved,
        }
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.current
    }

    pub fn saved_config(&self) -> &AvatarConfig {
        &self.saved
    }

    /// Whether there are edits that have not been saved.
    pub fn is_dirty(&self) -> bool {
        self.current != self.saved
    }

    /// Fields whose current value is outside its catalog.
    pub fn invalid_fields(&self) -> Vec<AvatarField> {
        self.current.validate()
    }

    pub fn preview(&self) -> AvatarImage {
        render(&self.current)
    }

    pub fn select(&mut self, field: AvatarField, value: &str) -> Result<()> {
        self.current.set(field, value)
    }

    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current = AvatarConfig::randomize(rng);
    }

    pub fn reset_to_default(&mut self) {
        self.current = AvatarConfig::default();
    }

    /// Throws away unsaved edits.
    pub fn revert(&mut self) {
        self.current = self.saved.clone();
    }

    /// Saves the current config with one whole-record replace.
    pub async fn save(&mut self) -> Result<AvatarConfig> {
        match self.profiles.update_avatar(&self.user_id, &self.current).await {
            Ok(stored) => {
                tracing::info!(user_id = %self.user_id, "Avatar saved");
                self.saved = stored.clone();
                self.current = stored.clone();
                self.toasts.info("Avatar saved!");
                Ok(stored)
            }
            Err(e) => {
                tracing::warn!(user_id = %self.user_id, error = %e, "Avatar save failed");
                self.toasts.error(&e.user_message());
                Err(e)
            }
        }
    }
}
