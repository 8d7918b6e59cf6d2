//! Signed-in session state owned by the composition root.
//!
//! `AppSession` replaces an ambient global: it is created at start-up,
//! handed to every view that needs the current member, and torn down on
//! sign-out. Nothing refreshes implicitly; callers invoke the load and
//! refresh operations explicitly.

use crate::toast::ToastSink;
use familia_core::auth::{LoginRequest, SignupRequest};
use familia_core::error::{FamiliaError, Result};
use familia_core::gateway::{AuthGateway, ProfileGateway};
use familia_core::profile::{Notification, Profile, Relationship, RoleSelection};
use familia_core::session_store::{SessionRepository, SessionSnapshot};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Everything the client knows about the signed-in member.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub user: Option<Profile>,
    pub relationships: Vec<Relationship>,
    pub notifications: Vec<Notification>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some() && self.user_id.is_some()
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }
}

/// Explicit application state for one signed-in member.
pub struct AppSession {
    auth: Arc<dyn AuthGateway>,
    profiles: Arc<dyn ProfileGateway>,
    repository: Arc<dyn SessionRepository>,
    toasts: Arc<dyn ToastSink>,
    state: RwLock<SessionState>,
}

impl AppSession {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        profiles: Arc<dyn ProfileGateway>,
        repository: Arc<dyn SessionRepository>,
        toasts: Arc<dyn ToastSink>,
    ) -> Self {
        Self {
            auth,
            profiles,
            repository,
            toasts,
            state: RwLock::new(SessionState::default()),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_signed_in(&self) -> bool {
        self.state.read().await.is_signed_in()
    }

    pub async fn user(&self) -> Option<Profile> {
        self.state.read().await.user.clone()
    }

    pub async fn user_id(&self) -> Option<String> {
        self.state.read().await.user_id.clone()
    }

    pub async fn relationships(&self) -> Vec<Relationship> {
        self.state.read().await.relationships.clone()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications.clone()
    }

    pub async fn unread_count(&self) -> usize {
        self.state.read().await.unread_count()
    }

    async fn require_user_id(&self) -> Result<String> {
        self.state
            .read()
            .await
            .user_id
            .clone()
            .ok_or(FamiliaError::Unauthenticated)
    }

    /// Warm start from the persisted snapshot, then a fresh profile fetch.
    ///
    /// Returns whether a session is active afterwards. A rejected token
    /// clears the snapshot; an unreachable server keeps the cached profile.
    pub async fn restore(&self) -> Result<bool> {
        let snapshot = self.repository.load().await?;
        if !snapshot.is_signed_in() {
            tracing::debug!("No saved session");
            return Ok(false);
        }

        self.auth.set_token(snapshot.token.clone());
        {
            let mut state = self.state.write().await;
            state.token = snapshot.token.clone();
            state.user_id = snapshot.user_id.clone();
            state.user = snapshot.profile.clone();
        }

        match self.refresh_user().await {
            Ok(profile) => {
                tracing::info!(user_id = %profile.id, "Session restored");
                Ok(true)
            }
            Err(e) if e.is_unauthenticated() || e.is_not_found() => {
                tracing::info!("Saved session is no longer valid");
                self.logout().await?;
                Ok(false)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Using cached profile; refresh failed");
                Ok(true)
            }
        }
    }

    /// Signs in with email and password.
    ///
    /// # Errors
    ///
    /// `Validation` for blank fields (nothing is sent), otherwise the
    /// gateway error. Failures are also surfaced as a toast.
    pub async fn login(&self, email: &str, password: &str) -> Result<Profile> {
        let request = LoginRequest::new(email.trim(), password);
        request.validate()?;

        let response = match self.auth.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                self.toasts.error(&e.user_message());
                return Err(e);
            }
        };
        self.establish(response.access_token, response.user_id).await
    }

    /// Creates an account; required fields are checked before anything is sent.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Profile> {
        request.validate()?;

        let response = match self.auth.signup(request).await {
            Ok(response) => response,
            Err(e) => {
                self.toasts.error(&e.user_message());
                return Err(e);
            }
        };
        let profile = self
            .establish(response.access_token, response.user_id)
            .await?;
        self.toasts.info("Welcome to Familia!");
        Ok(profile)
    }

    async fn establish(&self, token: String, user_id: String) -> Result<Profile> {
        self.auth.set_token(Some(token.clone()));
        {
            let mut state = self.state.write().await;
            *state = SessionState {
                token: Some(token.clone()),
                user_id: Some(user_id.clone()),
                ..SessionState::default()
            };
        }
        let established = match self
            .repository
            .save(SessionSnapshot::new(token, user_id.clone()))
            .await
        {
            Ok(()) => self.refresh_user().await,
            Err(e) => Err(e),
        };

        match established {
            Ok(profile) => {
                tracing::info!(%user_id, "Signed in");
                Ok(profile)
            }
            Err(e) => {
                // a half-established session is rolled back entirely
                tracing::warn!(%user_id, error = %e, "Sign-in could not be completed");
                self.toasts.error(&e.user_message());
                if let Err(clear_err) = self.logout().await {
                    tracing::warn!(error = %clear_err, "Failed to clear partial session");
                }
                Err(e)
            }
        }
    }

    /// Drops the token and every cached row.
    pub async fn logout(&self) -> Result<()> {
        self.auth.set_token(None);
        *self.state.write().await = SessionState::default();
        self.repository.clear().await?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Re-fetches the member profile and refreshes the warm-start snapshot.
    pub async fn refresh_user(&self) -> Result<Profile> {
        let user_id = self.require_user_id().await?;
        let profile = self.profiles.get_profile(&user_id).await?;

        let snapshot = {
            let mut state = self.state.write().await;
            state.user = Some(profile.clone());
            SessionSnapshot {
                token: state.token.clone(),
                user_id: state.user_id.clone(),
                profile: Some(profile.clone()),
            }
        };
        if let Err(e) = self.repository.save(snapshot).await {
            tracing::warn!(error = %e, "Failed to persist session snapshot");
        }
        Ok(profile)
    }

    pub async fn refresh_relationships(&self) -> Result<Vec<Relationship>> {
        let user_id = self.require_user_id().await?;
        let relationships = self.profiles.relationships(&user_id).await?;
        self.state.write().await.relationships = relationships.clone();
        Ok(relationships)
    }

    pub async fn refresh_notifications(&self) -> Result<Vec<Notification>> {
        let user_id = self.require_user_id().await?;
        let notifications = self.profiles.notifications(&user_id).await?;
        self.state.write().await.notifications = notifications.clone();
        Ok(notifications)
    }

    /// Marks a notification read locally right away; the remote update is
    /// best-effort and its failure is only logged.
    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        let user_id = self.require_user_id().await?;
        {
            let mut state = self.state.write().await;
            match state
                .notifications
                .iter_mut()
                .find(|n| n.id == notification_id)
            {
                Some(notification) if notification.is_read => return Ok(()),
                Some(notification) => notification.is_read = true,
                None => return Err(FamiliaError::not_found("Notification", notification_id)),
            }
        }

        if let Err(e) = self
            .profiles
            .mark_notification_read(&user_id, notification_id)
            .await
        {
            tracing::warn!(%notification_id, error = %e, "Failed to mark notification read");
        }
        Ok(())
    }

    pub async fn delete_notification(&self, notification_id: &str) -> Result<()> {
        let user_id = self.require_user_id().await?;
        if let Err(e) = self
            .profiles
            .delete_notification(&user_id, notification_id)
            .await
        {
            self.toasts.error(&e.user_message());
            return Err(e);
        }

        self.state
            .write()
            .await
            .notifications
            .retain(|n| n.id != notification_id);
        Ok(())
    }

    /// Applies a row delivered by the push channel.
    ///
    /// New rows are prepended; a row already present is replaced in place so
    /// read-state updates land. Returns `true` when the row was new.
    pub async fn apply_pushed_notification(&self, notification: Notification) -> bool {
        let mut state = self.state.write().await;
        if let Some(existing) = state
            .notifications
            .iter_mut()
            .find(|n| n.id == notification.id)
        {
            *existing = notification;
            return false;
        }
        state.notifications.insert(0, notification);
        true
    }

    /// Declares the roles the member offers and seeks.
    pub async fn set_roles(
        &self,
        offering_role: Option<String>,
        seeking_role: Option<String>,
        preferred_roles: Option<Vec<String>>,
    ) -> Result<()> {
        self.require_user_id().await?;
        let selection = RoleSelection {
            offering_role,
            seeking_role,
            preferred_roles,
        };

        if let Err(e) = self.profiles.set_roles(&selection).await {
            self.toasts.error(&e.user_message());
            return Err(e);
        }
        if let Err(e) = self.refresh_user().await {
            tracing::warn!(error = %e, "Roles saved but profile refresh failed");
        }
        Ok(())
    }

    /// Records a relationship created by a connect and reloads the list.
    pub async fn record_connection(&self, relationship: Relationship) -> Result<()> {
        {
            let mut state = self.state.write().await;
            if !state.relationships.iter().any(|r| r.id == relationship.id) {
                state.relationships.insert(0, relationship);
            }
        }
        if let Err(e) = self.refresh_relationships().await {
            tracing::warn!(error = %e, "Failed to refresh relationships after connect");
        }
        Ok(())
    }
}
