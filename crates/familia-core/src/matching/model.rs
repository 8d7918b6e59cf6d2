//! Browse results and the quick-match state machine.

use super::role::offering_matches;
use serde::{Deserialize, Serialize};

/// A public profile card returned by the role browse endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseProfile {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub care_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering_role: Option<String>,
}

impl BrowseProfile {
    pub fn offers(&self, requested_role: &str) -> bool {
        offering_matches(requested_role, self.offering_role.as_deref())
    }
}

/// A single role browse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBrowseQuery {
    pub requested_role: String,
    /// Use the authenticated browse endpoint instead of the public one.
    pub authenticated: bool,
}

impl RoleBrowseQuery {
    pub fn new(requested_role: impl Into<String>, authenticated: bool) -> Self {
        Self {
            requested_role: requested_role.into(),
            authenticated,
        }
    }

    /// Keeps only the candidates whose offering role satisfies this query.
    pub fn filter(&self, candidates: Vec<BrowseProfile>) -> Vec<BrowseProfile> {
        candidates
            .into_iter()
            .filter(|c| c.offers(&self.requested_role))
            .collect()
    }
}

/// Where the quick-match flow currently is.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPhase {
    SelectRole,
    SelectPartner { my_role: String },
    Searching { my_role: String, partner_role: String },
    Found { my_role: String, partner_role: String, matches: Vec<BrowseProfile> },
    NotFound { my_role: String, partner_role: String },
}

impl MatchPhase {
    pub fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Found { .. } | Self::NotFound { .. })
    }

    /// The matches shown to the user, empty outside `Found`.
    pub fn matches(&self) -> &[BrowseProfile] {
        match self {
            Self::Found { matches, .. } => matches,
            _ => &[],
        }
    }

    /// Short label used in logs and the CLI.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectRole => "select-role",
            Self::SelectPartner { .. } => "select-partner-role",
            Self::Searching { .. } => "searching",
            Self::Found { .. } => "found",
            Self::NotFound { .. } => "not-found",
        }
    }
}
