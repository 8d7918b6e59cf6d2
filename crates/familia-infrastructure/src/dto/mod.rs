//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the versioned schema of the files under the Familia
//! config directory. They are private to the infrastructure layer and handle
//! the evolution of the storage format over time.
//!
//! ### ClientConfig Version History
//! - **1.0.0**: API URL, request timeout, chat polling
//! - **1.1.0**: Added `quick_match` pacing table
//!
//! ### SessionSnapshot Version History
//! - **1.0.0**: Token and user id
//! - **1.1.0**: Added cached `profile`

mod client_config;
mod session_snapshot;

pub use client_config::{
    ClientConfigV1_0_0, ClientConfigV1_1_0, QuickMatchDTO, create_client_config_migrator,
};
pub use session_snapshot::{
    SessionSnapshotV1_0_0, SessionSnapshotV1_1_0, create_session_snapshot_migrator,
};
