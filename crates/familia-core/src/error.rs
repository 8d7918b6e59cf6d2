//! Error types for the Familia client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default message used when the server returns a non-JSON error body.
pub const DEFAULT_API_ERROR_DETAIL: &str = "An error occurred";

/// A shared error type for the entire Familia client.
///
/// API failures are split three ways: transport failures (`Network`),
/// non-2xx responses carrying a server message (`Api`), and checks that
/// fail before anything is sent (`Validation`). The remaining variants
/// cover local storage and configuration.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FamiliaError {
    /// Server unreachable, timed out, or the connection dropped
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-2xx response from the REST backend
    #[error("{detail}")]
    Api { status: u16, detail: String },

    /// Client-side required-field check failed before submission
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(String),

    /// The operation requires a signed-in user
    #[error("Not signed in")]
    Unauthenticated,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FamiliaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an Api error from a status code and server-supplied detail
    pub fn api(status: u16, detail: impl Into<String>) -> Self {
        Self::Api {
            status,
            detail: detail.into(),
        }
    }

    /// Creates a Validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Creates a Migration error
    pub fn migration(message: impl Into<String>) -> Self {
        Self::Migration(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a transport-level failure
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a non-2xx API response
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a client-side validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the caller needs to sign in again.
    ///
    /// True for `Unauthenticated` and for API responses with status 401.
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            Self::Unauthenticated => true,
            Self::Api { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// Message suitable for a transient user-facing notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { detail, .. } => detail.clone(),
            Self::Validation { message, .. } => message.clone(),
            Self::Network { .. } => "Could not reach the Familia server".to_string(),
            Self::Unauthenticated => "Please sign in again".to_string(),
            other => other.to_string(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for FamiliaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for FamiliaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for FamiliaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for FamiliaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<version_migrate::MigrationError> for FamiliaError {
    fn from(err: version_migrate::MigrationError) -> Self {
        use version_migrate::MigrationError;

        match err {
            MigrationError::EntityNotFound(id) => Self::not_found("entity", id),
            MigrationError::DeserializationError(_) | MigrationError::SerializationError(_) => {
                Self::Serialization {
                    format: "migration".to_string(),
                    message: err.to_string(),
                }
            }
            MigrationError::TomlParseError(_) | MigrationError::TomlSerializeError(_) => {
                Self::Serialization {
                    format: "TOML".to_string(),
                    message: err.to_string(),
                }
            }
            MigrationError::IoError { .. } => Self::Io {
                message: err.to_string(),
            },
            _ => Self::Migration(err.to_string()),
        }
    }
}

/// Conversion from anyhow::Error (transitional, should be removed eventually)
impl From<anyhow::Error> for FamiliaError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Conversion from String (for error messages)
impl From<String> for FamiliaError {
    fn from(err: String) -> Self {
        Self::Internal(err)
    }
}

/// A type alias for `Result<T, FamiliaError>`.
pub type Result<T> = std::result::Result<T, FamiliaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_server_detail() {
        let err = FamiliaError::api(400, "Email already registered");
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.user_message(), "Email already registered");
        assert!(err.is_api());
        assert!(!err.is_network());
    }

    #[test]
    fn test_unauthenticated_includes_401() {
        assert!(FamiliaError::Unauthenticated.is_unauthenticated());
        assert!(FamiliaError::api(401, "Invalid token").is_unauthenticated());
        assert!(!FamiliaError::api(403, "Forbidden").is_unauthenticated());
    }

    #[test]
    fn test_validation_user_message_is_the_message() {
        let err = FamiliaError::validation("email", "Email is required");
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Email is required");
        assert_eq!(err.to_string(), "email: Email is required");
    }

    #[test]
    fn test_io_conversion_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: FamiliaError = io.into();
        assert!(err.is_io());
        assert!(err.to_string().contains("PermissionDenied"));
    }

    #[test]
    fn test_json_conversion_is_serialization() {
        let err: FamiliaError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(err.is_serialization());
    }
}
