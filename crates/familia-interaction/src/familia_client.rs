//! Typed client for the Familia REST API.

use crate::api_client::ApiClient;
use familia_core::config::ClientConfig;
use familia_core::error::Result;
use std::time::Duration;

/// REST client implementing every gateway trait of `familia-core`.
///
/// Cloning is cheap and clones share the bearer token, so one instance can
/// be handed to every use case.
///
/// # Example
///
/// ```ignore
/// let client = FamiliaClient::new(&ClientConfig::default())?;
/// let auth = client.login(&LoginRequest::new("ana@example.com", "secret")).await?;
/// client.set_token(Some(auth.access_token));
/// ```
#[derive(Clone)]
pub struct FamiliaClient {
    pub(crate) api: ApiClient,
}

impl FamiliaClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            api: ApiClient::new(config)?,
        })
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            api: ApiClient::with_base_url(base_url, timeout)?,
        })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.is_authenticated()
    }
}
