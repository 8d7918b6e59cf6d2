//! Profile, relationship and notification models.
//!
//! These records are owned by the backend and displayed as-is; optional
//! fields default so partial rows (e.g. push payloads) still deserialize.

use crate::avatar::AvatarConfig;
use serde::{Deserialize, Serialize};

/// The signed-in member's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_config: Option<AvatarConfig>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub care_score: f64,
    #[serde(default)]
    pub reliability_score: f64,
    #[serde(default)]
    pub total_bond_points: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering_role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seeking_role: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferred_roles: Vec<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

impl Profile {
    /// Saved avatar, or the first-visit default when none has been saved yet.
    pub fn avatar(&self) -> AvatarConfig {
        self.avatar_config.clone().unwrap_or_default()
    }
}

/// Partner summary embedded in a relationship row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_config: Option<AvatarConfig>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub care_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A bond between the signed-in member and a partner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<Partner>,
    #[serde(default)]
    pub my_role: String,
    #[serde(default)]
    pub partner_role: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub bond_points: i64,
    #[serde(default)]
    pub care_score: f64,
    #[serde(default)]
    pub streak_days: i32,
    #[serde(default)]
    pub messages_exchanged: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_interaction_at: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Response of `GET /chat/relationship/{id}`: the bond seen from one side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipDetails {
    #[serde(default)]
    pub relationship: serde_json::Value,
    #[serde(default)]
    pub partner: Option<Partner>,
    #[serde(default = "default_timezone")]
    pub partner_timezone: String,
    #[serde(default)]
    pub my_role: String,
    #[serde(default)]
    pub partner_role: String,
    #[serde(default)]
    pub features_unlocked: std::collections::BTreeMap<String, bool>,
}

/// An in-app notification row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: String,
}

/// A language on the member's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInput {
    pub language_code: String,
    pub language_name: String,
    #[serde(default = "default_proficiency")]
    pub proficiency: String,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub show_original: bool,
}

fn default_proficiency() -> String {
    "native".to_string()
}

/// Partial profile update; only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
}

/// Body of `POST /profiles/me/role`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_roles: Option<Vec<String>>,
}
