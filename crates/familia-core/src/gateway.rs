//! Gateway traits for the remote Familia service.
//!
//! The application layer depends only on these traits; the REST client in
//! `familia-interaction` implements them and tests substitute in-memory mocks.

use async_trait::async_trait;

use crate::auth::{AuthResponse, LoginRequest, SignupRequest};
use crate::avatar::AvatarConfig;
use crate::chat::{Message, SendMessageRequest, SupportedLanguage, Translation};
use crate::error::Result;
use crate::matching::{BrowseProfile, RoleBrowseQuery};
use crate::profile::{
    LanguageInput, Notification, Profile, ProfileUpdate, Relationship, RoleSelection,
};

/// Sign-in, sign-up and the bearer token used by every other call.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse>;

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse>;

    /// Profile of the token's owner.
    async fn me(&self) -> Result<Profile>;

    /// Installs or removes the bearer token for subsequent requests.
    fn set_token(&self, token: Option<String>);
}

/// Profile, relationship and notification access for one member.
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Profile>;

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile>;

    /// Whole-record replace of the saved avatar.
    async fn update_avatar(&self, user_id: &str, config: &AvatarConfig) -> Result<AvatarConfig>;

    async fn add_language(&self, user_id: &str, language: &LanguageInput) -> Result<()>;

    async fn relationships(&self, user_id: &str) -> Result<Vec<Relationship>>;

    async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    async fn mark_notification_read(&self, user_id: &str, notification_id: &str) -> Result<()>;

    async fn delete_notification(&self, user_id: &str, notification_id: &str) -> Result<()>;

    async fn set_roles(&self, selection: &RoleSelection) -> Result<()>;
}

/// Role browse directory and connection requests.
#[async_trait]
pub trait MatchingGateway: Send + Sync {
    /// Candidates for a role, from the public or authenticated endpoint.
    ///
    /// The server list is not guaranteed to be filtered; callers apply the
    /// alias-aware rule themselves.
    async fn browse(&self, query: &RoleBrowseQuery) -> Result<Vec<BrowseProfile>>;

    /// Unfiltered directory of every member with an offering role.
    async fn browse_all(&self) -> Result<Vec<BrowseProfile>>;

    /// Turns a found profile into a relationship.
    async fn connect(&self, target_user_id: &str, role: &str) -> Result<Relationship>;
}

/// Conversation history and sending.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// The newest `limit` messages, oldest first.
    async fn messages(&self, relationship_id: &str, limit: u32) -> Result<Vec<Message>>;

    async fn send(&self, request: &SendMessageRequest) -> Result<Message>;
}

/// Machine translation with idiom and cultural notes.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<Translation>;

    async fn languages(&self) -> Result<Vec<SupportedLanguage>>;
}
