//! Warm-start snapshot of the signed-in session.

use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use version_migrate::DeriveQueryable as Queryable;

/// Token and last-known profile kept between runs.
///
/// Only a warm-start cache: the profile is always re-fetched after restore.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Queryable)]
#[queryable(entity = "session")]
pub struct SessionSnapshot {
    pub token: Option<String>,
    pub user_id: Option<String>,
    pub profile: Option<Profile>,
}

impl SessionSnapshot {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user_id: Some(user_id.into()),
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Whether the snapshot carries enough to resume a session.
    pub fn is_signed_in(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user_id.is_some()
    }
}
