//! ClientConfig DTOs and migrations.

use serde::{Deserialize, Serialize};
use version_migrate::{IntoDomain, Versioned};

use familia_core::config::{ClientConfig, DEFAULT_API_BASE_URL, QuickMatchSettings};

/// Client configuration V1.0.0 (initial version).
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.0.0")]
pub struct ClientConfigV1_0_0 {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_chat_poll_interval_ms")]
    pub chat_poll_interval_ms: u64,
    #[serde(default = "default_chat_history_limit")]
    pub chat_history_limit: u32,
}

/// Quick-match pacing as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickMatchDTO {
    pub poll_interval_ms: u64,
    pub max_attempts: u32,
    pub min_search_duration_ms: u64,
}

impl Default for QuickMatchDTO {
    fn default() -> Self {
        QuickMatchSettings::default().into()
    }
}

/// Client configuration V1.1.0.
///
/// Added the `quick_match` table.
#[derive(Debug, Clone, Serialize, Deserialize, Versioned)]
#[versioned(version = "1.1.0")]
pub struct ClientConfigV1_1_0 {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_chat_poll_interval_ms")]
    pub chat_poll_interval_ms: u64,
    #[serde(default = "default_chat_history_limit")]
    pub chat_history_limit: u32,
    #[serde(default)]
    pub quick_match: QuickMatchDTO,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    ClientConfig::default().request_timeout_secs
}

fn default_chat_poll_interval_ms() -> u64 {
    ClientConfig::default().chat_poll_interval_ms
}

fn default_chat_history_limit() -> u32 {
    ClientConfig::default().chat_history_limit
}

impl From<QuickMatchSettings> for QuickMatchDTO {
    fn from(settings: QuickMatchSettings) -> Self {
        Self {
            poll_interval_ms: settings.poll_interval_ms,
            max_attempts: settings.max_attempts,
            min_search_duration_ms: settings.min_search_duration_ms,
        }
    }
}

impl From<QuickMatchDTO> for QuickMatchSettings {
    fn from(dto: QuickMatchDTO) -> Self {
        Self {
            poll_interval_ms: dto.poll_interval_ms,
            max_attempts: dto.max_attempts,
            min_search_duration_ms: dto.min_search_duration_ms,
        }
    }
}

/// Migration from V1.0.0 to V1.1.0.
/// Quick-match pacing starts at the defaults.
impl version_migrate::MigratesTo<ClientConfigV1_1_0> for ClientConfigV1_0_0 {
    fn migrate(self) -> ClientConfigV1_1_0 {
        ClientConfigV1_1_0 {
            api_base_url: self.api_base_url,
            request_timeout_secs: self.request_timeout_secs,
            chat_poll_interval_ms: self.chat_poll_interval_ms,
            chat_history_limit: self.chat_history_limit,
            quick_match: QuickMatchDTO::default(),
        }
    }
}

impl IntoDomain<ClientConfig> for ClientConfigV1_1_0 {
    fn into_domain(self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url,
            request_timeout_secs: self.request_timeout_secs,
            chat_poll_interval_ms: self.chat_poll_interval_ms,
            chat_history_limit: self.chat_history_limit,
            quick_match: self.quick_match.into(),
        }
    }
}

impl version_migrate::FromDomain<ClientConfig> for ClientConfigV1_1_0 {
    fn from_domain(config: ClientConfig) -> Self {
        ClientConfigV1_1_0 {
            api_base_url: config.api_base_url,
            request_timeout_secs: config.request_timeout_secs,
            chat_poll_interval_ms: config.chat_poll_interval_ms,
            chat_history_limit: config.chat_history_limit,
            quick_match: config.quick_match.into(),
        }
    }
}

/// Creates and configures a Migrator instance for ClientConfig entities.
///
/// # Example
///
/// ```ignore
/// let migrator = create_client_config_migrator();
/// let config: ClientConfig = migrator.load_flat_from("client_config", toml_value)?;
/// ```
pub fn create_client_config_migrator() -> version_migrate::Migrator {
    let mut migrator = version_migrate::Migrator::builder().build();

    // V1.0.0 -> V1.1.0 -> ClientConfig
    let config_path = version_migrate::Migrator::define("client_config")
        .from::<ClientConfigV1_0_0>()
        .step::<ClientConfigV1_1_0>()
        .into_with_save::<ClientConfig>();

    migrator
        .register(config_path)
        .expect("Failed to register client_config migration path");

    migrator
}
