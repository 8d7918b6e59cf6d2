use crate::FamiliaClient;
use async_trait::async_trait;
use familia_core::auth::{AuthResponse, LoginRequest, SignupRequest};
use familia_core::error::Result;
use familia_core::gateway::AuthGateway;
use familia_core::profile::Profile;
use serde::Deserialize;

#[derive(Deserialize)]
struct MeResponse {
    profile: Profile,
}

#[async_trait]
impl AuthGateway for FamiliaClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.api.post("/auth/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        self.api.post("/auth/signup", request).await
    }

    async fn me(&self) -> Result<Profile> {
        let response: MeResponse = self.api.get("/auth/me").await?;
        Ok(response.profile)
    }

    fn set_token(&self, token: Option<String>) {
        self.api.set_token(token);
    }
}
