//! In-memory gateway doubles shared by the use case tests.

use async_trait::async_trait;
use familia_core::auth::{AuthResponse, LoginRequest, SignupRequest};
use familia_core::avatar::AvatarConfig;
use familia_core::chat::{Message, SendMessageRequest, SupportedLanguage, Translation};
use familia_core::error::{FamiliaError, Result};
use familia_core::gateway::{
    AuthGateway, ChatGateway, MatchingGateway, ProfileGateway, TranslationGateway,
};
use familia_core::matching::{BrowseProfile, RoleBrowseQuery};
use familia_core::profile::{
    LanguageInput, Notification, Profile, ProfileUpdate, Relationship, RoleSelection,
};
use familia_core::session_store::{SessionRepository, SessionSnapshot};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn profile(id: &str, name: &str) -> Profile {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "username": name.to_lowercase(),
        "display_name": name,
        "country": "BR",
    }))
    .unwrap()
}

pub fn candidate(id: &str, offering_role: Option<&str>) -> BrowseProfile {
    BrowseProfile {
        id: id.to_string(),
        display_name: format!("Member {}", id),
        country: "JP".to_string(),
        city: None,
        is_verified: true,
        care_score: 4.0,
        bio: None,
        offering_role: offering_role.map(str::to_string),
    }
}

pub fn message(id: &str, text: &str) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "relationship_id": "rel-1",
        "sender_id": "u-ana",
        "original_text": text,
        "created_at": "2025-01-01T00:00:00Z",
    }))
    .unwrap()
}

pub fn notification(id: &str, is_read: bool) -> Notification {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "type": "new_message",
        "title": format!("Notification {}", id),
        "is_read": is_read,
        "created_at": "2025-01-01T00:00:00Z",
    }))
    .unwrap()
}

pub fn relationship(id: &str) -> Relationship {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "my_role": "sister",
        "partner_role": "brother",
        "status": "active",
    }))
    .unwrap()
}

/// Scriptable stand-in for the whole REST backend.
///
/// Browse and send results are consumed from queues; when a queue is empty
/// the default (empty list, echoed message) is used.
#[derive(Default)]
pub struct MockBackend {
    pub token: Mutex<Option<String>>,
    pub profile: Mutex<Option<Profile>>,
    pub profile_error: Mutex<Option<FamiliaError>>,
    pub login_error: Mutex<Option<FamiliaError>>,
    pub relationships: Mutex<Vec<Relationship>>,
    pub notifications: Mutex<Vec<Notification>>,
    pub notification_error: Mutex<Option<FamiliaError>>,
    pub avatar_error: Mutex<Option<FamiliaError>>,
    pub saved_avatar: Mutex<Option<AvatarConfig>>,
    pub roles: Mutex<Option<RoleSelection>>,
    pub browse_results: Mutex<VecDeque<Result<Vec<BrowseProfile>>>>,
    pub connected: Mutex<Vec<(String, String)>>,
    pub messages: Mutex<Vec<Message>>,
    pub send_error: Mutex<Option<FamiliaError>>,
    pub sent: Mutex<Vec<SendMessageRequest>>,
    pub calls: CallCounts,
}

#[derive(Default)]
pub struct CallCounts {
    pub login: AtomicUsize,
    pub signup: AtomicUsize,
    pub get_profile: AtomicUsize,
    pub update_avatar: AtomicUsize,
    pub mark_read: AtomicUsize,
    pub browse: AtomicUsize,
    pub messages: AtomicUsize,
    pub send: AtomicUsize,
    pub translate: AtomicUsize,
}

impl CallCounts {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

fn bump(counter: &AtomicUsize) {
    counter.fetch_add(1, Ordering::SeqCst);
}

fn take_error(slot: &Mutex<Option<FamiliaError>>) -> Result<()> {
    match slot.lock().unwrap().clone() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, profile: Profile) -> Self {
        *self.profile.lock().unwrap() = Some(profile);
        self
    }

    pub fn push_browse(&self, result: Result<Vec<BrowseProfile>>) {
        self.browse_results.lock().unwrap().push_back(result);
    }

    pub fn set_messages(&self, messages: Vec<Message>) {
        *self.messages.lock().unwrap() = messages;
    }

    pub fn fail_with(slot: &Mutex<Option<FamiliaError>>, err: FamiliaError) {
        *slot.lock().unwrap() = Some(err);
    }
}

#[async_trait]
impl AuthGateway for MockBackend {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        bump(&self.calls.login);
        take_error(&self.login_error)?;
        Ok(AuthResponse {
            access_token: format!("tok-{}", request.email),
            user_id: "u-ana".to_string(),
            email: request.email.clone(),
        })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        bump(&self.calls.signup);
        Ok(AuthResponse {
            access_token: "tok-new".to_string(),
            user_id: "u-ana".to_string(),
            email: request.email.clone(),
        })
    }

    async fn me(&self) -> Result<Profile> {
        self.get_profile("u-ana").await
    }

    fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }
}

#[async_trait]
impl ProfileGateway for MockBackend {
    async fn get_profile(&self, user_id: &str) -> Result<Profile> {
        bump(&self.calls.get_profile);
        take_error(&self.profile_error)?;
        self.profile
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| FamiliaError::not_found("Profile", user_id))
    }

    async fn update_profile(&self, user_id: &str, _update: &ProfileUpdate) -> Result<Profile> {
        self.get_profile(user_id).await
    }

    async fn update_avatar(&self, _user_id: &str, config: &AvatarConfig) -> Result<AvatarConfig> {
        bump(&self.calls.update_avatar);
        take_error(&self.avatar_error)?;
        *self.saved_avatar.lock().unwrap() = Some(config.clone());
        Ok(config.clone())
    }

    async fn add_language(&self, _user_id: &str, _language: &LanguageInput) -> Result<()> {
        Ok(())
    }

    async fn relationships(&self, _user_id: &str) -> Result<Vec<Relationship>> {
        Ok(self.relationships.lock().unwrap().clone())
    }

    async fn notifications(&self, _user_id: &str) -> Result<Vec<Notification>> {
        Ok(self.notifications.lock().unwrap().clone())
    }

    async fn mark_notification_read(&self, _user_id: &str, _notification_id: &str) -> Result<()> {
        bump(&self.calls.mark_read);
        take_error(&self.notification_error)
    }

    async fn delete_notification(&self, _user_id: &str, notification_id: &str) -> Result<()> {
        take_error(&self.notification_error)?;
        self.notifications
            .lock()
            .unwrap()
            .retain(|n| n.id != notification_id);
        Ok(())
    }

    async fn set_roles(&self, selection: &RoleSelection) -> Result<()> {
        *self.roles.lock().unwrap() = Some(selection.clone());
        if let Some(profile) = self.profile.lock().unwrap().as_mut() {
            profile.offering_role = selection.offering_role.clone();
            profile.seeking_role = selection.seeking_role.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl MatchingGateway for MockBackend {
    async fn browse(&self, _query: &RoleBrowseQuery) -> Result<Vec<BrowseProfile>> {
        bump(&self.calls.browse);
        self.browse_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn browse_all(&self) -> Result<Vec<BrowseProfile>> {
        Ok(vec![candidate("p1", Some("brother")), candidate("p2", None)])
    }

    async fn connect(&self, target_user_id: &str, role: &str) -> Result<Relationship> {
        self.connected
            .lock()
            .unwrap()
            .push((target_user_id.to_string(), role.to_string()));
        let created = relationship(&format!("rel-{}", target_user_id));
        self.relationships.lock().unwrap().push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ChatGateway for MockBackend {
    async fn messages(&self, _relationship_id: &str, limit: u32) -> Result<Vec<Message>> {
        bump(&self.calls.messages);
        let messages = self.messages.lock().unwrap();
        let skip = messages.len().saturating_sub(limit as usize);
        Ok(messages[skip..].to_vec())
    }

    async fn send(&self, request: &SendMessageRequest) -> Result<Message> {
        bump(&self.calls.send);
        take_error(&self.send_error)?;
        self.sent.lock().unwrap().push(request.clone());

        let mut messages = self.messages.lock().unwrap();
        let stored = message(&format!("m-sent-{}", messages.len()), &request.original_text);
        messages.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl TranslationGateway for MockBackend {
    async fn translate(
        &self,
        text: &str,
        source_lang: Option<&str>,
        target_lang: &str,
    ) -> Result<Translation> {
        bump(&self.calls.translate);
        Ok(Translation {
            original: text.to_string(),
            source_language: source_lang.unwrap_or("pt").to_string(),
            target_language: target_lang.to_string(),
            translated_text: format!("[{}] {}", target_lang, text),
            has_idiom: false,
            idiom_explanation: None,
            cultural_note: Some("Said warmly between friends".to_string()),
        })
    }

    async fn languages(&self) -> Result<Vec<SupportedLanguage>> {
        Ok(vec![SupportedLanguage {
            code: "en".to_string(),
            name: "English".to_string(),
            flag: "🇺🇸".to_string(),
        }])
    }
}

/// Session repository kept in memory.
#[derive(Default)]
pub struct MemorySessionRepository {
    pub snapshot: Mutex<SessionSnapshot>,
}

impl MemorySessionRepository {
    pub fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
        }
    }
}

#[async_trait]
impl SessionRepository for MemorySessionRepository {
    async fn load(&self) -> Result<SessionSnapshot> {
        Ok(self.snapshot.lock().unwrap().clone())
    }

    async fn save(&self, snapshot: SessionSnapshot) -> Result<()> {
        *self.snapshot.lock().unwrap() = snapshot;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.snapshot.lock().unwrap() = SessionSnapshot::default();
        Ok(())
    }
}
