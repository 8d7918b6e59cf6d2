//! Trivia contests between the two members of a relationship.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub id: String,
    #[serde(default)]
    pub relationship_id: String,
    #[serde(default)]
    pub contest_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub max_points: i64,
    #[serde(default)]
    pub user_a_score: i64,
    #[serde(default)]
    pub user_b_score: i64,
    #[serde(default)]
    pub bond_points_awarded: i64,
    #[serde(default)]
    pub time_limit_minutes: u32,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestQuestion {
    pub id: String,
    #[serde(default)]
    pub contest_id: String,
    pub question_text: String,
    #[serde(default)]
    pub question_type: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub question_order: u32,
}

/// Response of `GET /contests/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestDetails {
    pub contest: Contest,
    #[serde(default)]
    pub questions: Vec<ContestQuestion>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestRequest {
    pub relationship_id: String,
    pub contest_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question_id: String,
    pub answer: String,
}
