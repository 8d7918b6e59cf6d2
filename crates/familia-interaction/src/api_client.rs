//! Uniform request helper for the Familia REST API.
//!
//! Every call goes through [`ApiClient::request`]: JSON bodies, the bearer
//! token when one is installed, and `{detail}` error bodies mapped onto
//! [`FamiliaError::Api`].

use familia_core::config::ClientConfig;
use familia_core::error::{DEFAULT_API_ERROR_DETAIL, FamiliaError, Result};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Detail used when the error body is JSON but carries no `detail`.
const REQUEST_FAILED_DETAIL: &str = "Request failed";

/// HTTP plumbing shared by every endpoint group.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::with_base_url(config.api_base(), config.request_timeout())
    }

    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FamiliaError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn set_token(&self, token: Option<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = token.filter(|t| !t.is_empty());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::GET, endpoint, &[], None).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::GET, endpoint, query, None).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::POST, endpoint, &[], Some(body)).await
    }

    /// POST with query parameters and no body.
    pub async fn post_with_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        self.request(Method::POST, endpoint, query, None).await
    }

    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request(Method::PUT, endpoint, &[], Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request(Method::DELETE, endpoint, &[], None).await
    }

    /// Sends one request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// - `FamiliaError::Network` when the server cannot be reached
    /// - `FamiliaError::Api` for non-2xx responses, carrying the server `detail`
    /// - `FamiliaError::Serialization` when a 2xx body does not match `T`
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%method, %url, "API request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "API request failed to send");
            FamiliaError::network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let detail = error_detail(&error_text);
            tracing::warn!(%method, %url, status = status.as_u16(), %detail, "API error");
            return Err(FamiliaError::api(status.as_u16(), detail));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FamiliaError::network(e.to_string()))?;
        serde_json::from_slice::<T>(&bytes).map_err(|e| FamiliaError::Serialization {
            format: "JSON".to_string(),
            message: format!("Unexpected response from {}: {}", endpoint, e),
        })
    }
}

/// Extracts the user-facing message from an error body.
fn error_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
            Some(Value::String(_)) | Some(Value::Null) | None => REQUEST_FAILED_DETAIL.to_string(),
            Some(other) => other.to_string(),
        },
        Ok(_) => REQUEST_FAILED_DETAIL.to_string(),
        Err(_) => DEFAULT_API_ERROR_DETAIL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_json() {
        assert_eq!(error_detail(r#"{"detail":"Invalid credentials"}"#), "Invalid credentials");
    }

    #[test]
    fn test_error_detail_non_json_falls_back() {
        assert_eq!(error_detail("<html>502 Bad Gateway</html>"), "An error occurred");
        assert_eq!(error_detail(""), "An error occurred");
    }

    #[test]
    fn test_error_detail_without_detail_field() {
        assert_eq!(error_detail(r#"{"error":"nope"}"#), "Request failed");
    }

    #[test]
    fn test_token_is_cleared_by_empty_string() {
        let client = ApiClient::with_base_url("http://localhost:8000/api/v1/", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api/v1");

        client.set_token(Some("tok".into()));
        assert!(client.is_authenticated());
        client.set_token(Some(String::new()));
        assert!(!client.is_authenticated());
    }
}
