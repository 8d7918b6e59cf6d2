//! Chat message and translation models.

use serde::{Deserialize, Serialize};

/// A confirmed chat message as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    #[serde(default)]
    pub relationship_id: String,
    #[serde(default)]
    pub sender_id: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    #[serde(default)]
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(default)]
    pub has_idiom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idiom_explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cultural_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub created_at: String,
}

fn default_content_type() -> String {
    "text".to_string()
}

impl Message {
    /// Text to show when translations are turned on, falling back to the original.
    pub fn display_text(&self, show_translation: bool) -> &str {
        match (&self.translated_text, show_translation) {
            (Some(translated), true) if !translated.is_empty() => translated,
            _ => &self.original_text,
        }
    }
}

/// Body of `POST /chat/send`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub relationship_id: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
    pub original_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SendMessageRequest {
    pub fn text(relationship_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            relationship_id: relationship_id.into(),
            content_type: default_content_type(),
            original_text: text.into(),
            original_language: None,
            voice_url: None,
            image_url: None,
        }
    }
}

/// Result of `POST /translate/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub original: String,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
    pub translated_text: String,
    #[serde(default)]
    pub has_idiom: bool,
    #[serde(default)]
    pub idiom_explanation: Option<String>,
    #[serde(default)]
    pub cultural_note: Option<String>,
}

/// An entry of `GET /translate/languages`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedLanguage {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub flag: String,
}
