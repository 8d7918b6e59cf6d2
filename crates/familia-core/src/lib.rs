//! Domain layer of the Familia client.
//!
//! Holds the avatar model and renderer, role matching, chat thread state,
//! the remote entity models, the shared error type and the gateway traits
//! implemented by the outer layers.

pub mod auth;
pub mod avatar;
pub mod chat;
pub mod config;
pub mod contests;
pub mod error;
pub mod games;
pub mod gateway;
pub mod matching;
pub mod profile;
pub mod rooms;
pub mod safety;
pub mod session_store;

// Re-export common error type
pub use error::{FamiliaError, Result};
