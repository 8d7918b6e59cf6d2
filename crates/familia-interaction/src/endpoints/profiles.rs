use crate::FamiliaClient;
use async_trait::async_trait;
use familia_core::avatar::AvatarConfig;
use familia_core::error::Result;
use familia_core::gateway::ProfileGateway;
use familia_core::profile::{
    LanguageInput, Notification, Profile, ProfileUpdate, Relationship, RoleSelection,
};
use serde::Deserialize;
use serde::de::IgnoredAny;

#[derive(Deserialize)]
struct ProfileResponse {
    profile: Profile,
}

#[derive(Deserialize)]
struct AvatarResponse {
    avatar_config: AvatarConfig,
}

#[derive(Deserialize)]
struct RelationshipsResponse {
    #[serde(default)]
    relationships: Vec<Relationship>,
}

#[derive(Deserialize)]
struct NotificationsResponse {
    #[serde(default)]
    notifications: Vec<Notification>,
}

#[async_trait]
impl ProfileGateway for FamiliaClient {
    async fn get_profile(&self, user_id: &str) -> Result<Profile> {
        let response: ProfileResponse = self.api.get(&format!("/profiles/{}", user_id)).await?;
        Ok(response.profile)
    }

    async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<Profile> {
        let response: ProfileResponse = self
            .api
            .put(&format!("/profiles/{}", user_id), update)
            .await?;
        Ok(response.profile)
    }

    async fn update_avatar(&self, user_id: &str, config: &AvatarConfig) -> Result<AvatarConfig> {
        let response: AvatarResponse = self
            .api
            .put(&format!("/profiles/{}/avatar", user_id), config)
            .await?;
        Ok(response.avatar_config)
    }

    async fn add_language(&self, user_id: &str, language: &LanguageInput) -> Result<()> {
        let _: IgnoredAny = self
            .api
            .post(&format!("/profiles/{}/languages", user_id), language)
            .await?;
        Ok(())
    }

    async fn relationships(&self, user_id: &str) -> Result<Vec<Relationship>> {
        let response: RelationshipsResponse = self
            .api
            .get(&format!("/profiles/{}/relationships", user_id))
            .await?;
        Ok(response.relationships)
    }

    async fn notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        let response: NotificationsResponse = self
            .api
            .get(&format!("/profiles/{}/notifications", user_id))
            .await?;
        Ok(response.notifications)
    }

    async fn mark_notification_read(&self, user_id: &str, notification_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .api
            .put(
                &format!("/profiles/{}/notifications/{}/read", user_id, notification_id),
                &serde_json::json!({}),
            )
            .await?;
        Ok(())
    }

    async fn delete_notification(&self, user_id: &str, notification_id: &str) -> Result<()> {
        let _: IgnoredAny = self
            .api
            .delete(&format!("/profiles/{}/notifications/{}", user_id, notification_id))
            .await?;
        Ok(())
    }

    async fn set_roles(&self, selection: &RoleSelection) -> Result<()> {
        let _: IgnoredAny = self.api.post("/profiles/me/role", selection).await?;
        Ok(())
    }
}
