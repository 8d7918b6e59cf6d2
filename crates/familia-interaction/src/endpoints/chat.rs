use crate::FamiliaClient;
use async_trait::async_trait;
use familia_core::chat::{Message, SendMessageRequest};
use familia_core::error::Result;
use familia_core::gateway::ChatGateway;
use familia_core::profile::RelationshipDetails;
use serde::Deserialize;

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct SendResponse {
    message: Message,
}

#[async_trait]
impl ChatGateway for FamiliaClient {
    async fn messages(&self, relationship_id: &str, limit: u32) -> Result<Vec<Message>> {
        let response: MessagesResponse = self
            .api
            .get_with_query(
                &format!("/chat/messages/{}", relationship_id),
                &[("limit", limit.to_string())],
            )
            .await?;
        Ok(response.messages)
    }

    async fn send(&self, request: &SendMessageRequest) -> Result<Message> {
        let response: SendResponse = self.api.post("/chat/send", request).await?;
        Ok(response.message)
    }
}

impl FamiliaClient {
    /// Relationship as seen by the signed-in member, with partner and unlocks.
    pub async fn relationship_details(&self, relationship_id: &str) -> Result<RelationshipDetails> {
        self.api
            .get(&format!("/chat/relationship/{}", relationship_id))
            .await
    }
}
