//! Family rooms: small group chats with a shared potluck calendar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMember {
    pub user_id: String,
    #[serde(default)]
    pub role_in_room: String,
    #[serde(default)]
    pub is_moderator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRoom {
    pub id: String,
    pub room_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub max_members: u32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub members: Vec<RoomMember>,
    #[serde(default)]
    pub member_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub my_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMessage {
    pub id: String,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub room_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub room_type: String,
    pub max_members: u32,
}

impl CreateRoomRequest {
    pub fn family(room_name: impl Into<String>) -> Self {
        Self {
            room_name: room_name.into(),
            description: None,
            room_type: "family".to_string(),
            max_members: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteToRoomRequest {
    pub user_id: String,
    pub role_in_room: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomMessageRequest {
    pub room_id: String,
    pub content_type: String,
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Potluck {
    pub id: String,
    #[serde(default)]
    pub room_id: String,
    #[serde(default)]
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(default)]
    pub scheduled_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PotluckList {
    #[serde(default)]
    pub potlucks: Vec<Potluck>,
    #[serde(default)]
    pub suggested_themes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePotluckRequest {
    pub room_id: String,
    pub theme: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_significance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    pub scheduled_at: String,
}

/// Server acknowledgement for leave, report and sever calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
