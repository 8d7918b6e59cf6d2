//! Sign-in and sign-up payloads.

use crate::error::{FamiliaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Required-field checks run before the request is sent.
    pub fn validate(&self) -> Result<()> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// New account registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub display_name: String,
    pub date_of_birth: NaiveDate,
    pub country: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

pub const MIN_PASSWORD_LEN: usize = 8;

impl SignupRequest {
    /// Checks required fields and basic shape before submission.
    ///
    /// # Errors
    ///
    /// Returns the first failing field as `FamiliaError::Validation`.
    pub fn validate(&self) -> Result<()> {
        require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(FamiliaError::validation("email", "Enter a valid email address"));
        }
        require("password", &self.password)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FamiliaError::validation(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            ));
        }
        require("username", &self.username)?;
        require("display_name", &self.display_name)?;
        require("country", &self.country)?;
        require("timezone", &self.timezone)
    }
}

/// Token issued by `/auth/login` and `/auth/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user_id: String,
    #[serde(default)]
    pub email: String,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FamiliaError::validation(
            field,
            format!("{} is required", field.replace('_', " ")),
        ));
    }
    Ok(())
}
