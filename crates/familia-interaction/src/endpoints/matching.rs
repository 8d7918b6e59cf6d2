use crate::FamiliaClient;
use async_trait::async_trait;
use familia_core::error::Result;
use familia_core::gateway::MatchingGateway;
use familia_core::matching::{BrowseProfile, RoleBrowseQuery, normalize_role};
use familia_core::profile::Relationship;
use serde::Deserialize;

#[derive(Deserialize)]
struct BrowseResponse {
    #[serde(default)]
    profiles: Vec<BrowseProfile>,
}

#[derive(Deserialize)]
struct ConnectResponse {
    relationship: Relationship,
}

#[async_trait]
impl MatchingGateway for FamiliaClient {
    async fn browse(&self, query: &RoleBrowseQuery) -> Result<Vec<BrowseProfile>> {
        let role = normalize_role(&query.requested_role);
        let endpoint = if query.authenticated {
            format!("/matching/browse/{}", role)
        } else {
            format!("/matching/browse-public/{}", role)
        };
        let response: BrowseResponse = self.api.get(&endpoint).await?;
        Ok(response.profiles)
    }

    async fn browse_all(&self) -> Result<Vec<BrowseProfile>> {
        let response: BrowseResponse = self.api.get("/matching/browse-all").await?;
        Ok(response.profiles)
    }

    async fn connect(&self, target_user_id: &str, role: &str) -> Result<Relationship> {
        let response: ConnectResponse = self
            .api
            .post_with_query(
                &format!("/matching/connect/{}", target_user_id),
                &[("role", normalize_role(role))],
            )
            .await?;
        Ok(response.relationship)
    }
}
