use crate::FamiliaClient;
use familia_core::contests::{AnswerRequest, Contest, ContestDetails, ContestRequest};
use familia_core::error::Result;
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ContestsResponse {
    #[serde(default)]
    contests: Vec<Contest>,
}

impl FamiliaClient {
    pub async fn create_contest(&self, request: &ContestRequest) -> Result<Value> {
        self.api.post("/contests/create", request).await
    }

    pub async fn contests(&self, relationship_id: &str) -> Result<Vec<Contest>> {
        let response: ContestsResponse = self
            .api
            .get(&format!("/contests/relationship/{}", relationship_id))
            .await?;
        Ok(response.contests)
    }

    pub async fn contest(&self, contest_id: &str) -> Result<ContestDetails> {
        self.api.get(&format!("/contests/{}", contest_id)).await
    }

    pub async fn submit_answer(&self, request: &AnswerRequest) -> Result<Value> {
        self.api.post("/contests/answer", request).await
    }

    pub async fn complete_contest(&self, contest_id: &str) -> Result<Value> {
        self.api
            .post(
                &format!("/contests/{}/complete", contest_id),
                &serde_json::json!({}),
            )
            .await
    }
}
