//! Mini-games played inside a relationship or a family room.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    #[serde(default)]
    pub game_type: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub icon_emoji: String,
    #[serde(default)]
    pub bond_points_reward: i64,
    #[serde(default)]
    pub estimated_minutes: u32,
}

/// Response of `GET /games/`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameCatalog {
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: String,
    #[serde(default)]
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub current_round: u32,
    #[serde(default)]
    pub total_rounds: u32,
    #[serde(default)]
    pub game_data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartGameRequest {
    pub game_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

/// Response of `POST /games/start`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartedGame {
    pub session: GameSession,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
    #[serde(default)]
    pub initial_data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameActionRequest {
    pub session_id: String,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}
