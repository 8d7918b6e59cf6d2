//! Session snapshot repository trait.

use async_trait::async_trait;

use super::model::SessionSnapshot;
use crate::error::Result;

/// Persistence for the warm-start session snapshot.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the stored snapshot; an empty snapshot when nothing was saved.
    async fn load(&self) -> Result<SessionSnapshot>;

    /// Replaces the stored snapshot.
    async fn save(&self, snapshot: SessionSnapshot) -> Result<()>;

    /// Forgets the token and cached profile.
    async fn clear(&self) -> Result<()>;
}
