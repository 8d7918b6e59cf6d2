//! Local persistence for the Familia client.
//!
//! Versioned TOML files under the Familia config directory: the client
//! configuration and the warm-start session snapshot.

pub mod config_service;
pub mod dto;
pub mod paths;
pub mod session_store;

pub use crate::config_service::ConfigService;
pub use crate::paths::{FamiliaPaths, PathError};
pub use crate::session_store::SessionStore;
