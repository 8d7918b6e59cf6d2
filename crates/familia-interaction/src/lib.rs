//! REST client for the Familia backend.
//!
//! [`FamiliaClient`] implements the gateway traits declared in
//! `familia-core` on top of [`ApiClient`], a thin `reqwest` wrapper that
//! owns the base URL, the timeout and the bearer token.

pub mod api_client;
mod endpoints;
pub mod familia_client;

pub use api_client::ApiClient;
pub use familia_client::FamiliaClient;
