//! SessionSnapshot DTOs and migrations.
//!
//! The snapshot lets the client start warm: the bearer token, the signed-in
//! user id and, since 1.1.0, the last fetched profile.

use serde::{Deserialize, Serialize};
use version_migrate::{IntoDomain, Versioned};

use familia_core::profile::Profile;
use familia_core::session_store::SessionSnapshot;

/// Session snapshot V1.0.0 (initial version).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct SessionSnapshotV1_0_0 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Session snapshot V1.1.0.
///
/// Added the cached profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct SessionSnapshotV1_1_0 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
}

impl version_migrate::MigratesTo<SessionSnapshotV1_1_0> for SessionSnapshotV1_0_0 {
    fn migrate(self) -> SessionSnapshotV1_1_0 {
        SessionSnapshotV1_1_0 {
            token: self.token,
            user_id: self.user_id,
            profile: None,
        }
    }
}

impl IntoDomain<SessionSnapshot> for SessionSnapshotV1_1_0 {
    fn into_domain(self) -> SessionSnapshot {
        SessionSnapshot {
            token: self.token,
            user_id: self.user_id,
            profile: self.profile,
        }
    }
}

impl version_migrate::FromDomain<SessionSnapshot> for SessionSnapshotV1_1_0 {
    fn from_domain(snapshot: SessionSnapshot) -> Self {
        SessionSnapshotV1_1_0 {
            token: snapshot.token,
            user_id: snapshot.user_id,
            profile: snapshot.profile,
        }
    }
}

/// Creates and configures a Migrator instance for session snapshots.
pub fn create_session_snapshot_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    let session_path = version_migrate::Migrator::define("session")
        .from::<SessionSnapshotV1_0_0>()
        .step::<SessionSnapshotV1_1_0>()
        .into_with_save::<SessionSnapshot>();

    migrator
        .register(session_path)
        .expect("Failed to register session migration path");

    migrator
}
