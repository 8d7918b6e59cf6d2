//! Mini-games.

use crate::FamiliaClient;
use familia_core::error::Result;
use familia_core::games::{GameActionRequest, GameCatalog, GameSession, StartGameRequest, StartedGame};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct SessionResponse {
    session: GameSession,
}

#[derive(Deserialize)]
struct HistoryResponse {
    #[serde(default)]
    sessions: Vec<GameSession>,
}

impl FamiliaClient {
    pub async fn games(&self) -> Result<GameCatalog> {
        self.api.get("/games/").await
    }

    pub async fn start_game(&self, request: &StartGameRequest) -> Result<StartedGame> {
        self.api.post("/games/start", request).await
    }

    /// Game-specific result of one move; its shape depends on the game.
    pub async fn game_action(&self, request: &GameActionRequest) -> Result<Value> {
        self.api.post("/games/action", request).await
    }

    pub async fn game_session(&self, session_id: &str) -> Result<GameSession> {
        let response: SessionResponse = self
            .api
            .get(&format!("/games/session/{}", session_id))
            .await?;
        Ok(response.session)
    }

    pub async fn game_history(&self, relationship_id: &str) -> Result<Vec<GameSession>> {
        let response: HistoryResponse = self
            .api
            .get(&format!("/games/history/{}", relationship_id))
            .await?;
        Ok(response.sessions)
    }
}
