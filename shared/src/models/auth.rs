use crate::error::{Result, SharedError};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for user login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// User's email address
    #[validate(email)]
    pub email: String,

    /// User's password
    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks that both fields are filled in and the email is well formed.
    pub fn validate_fields(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(SharedError::MissingField("email".to_string()));
        }
        if self.password.is_empty() {
            return Err(SharedError::MissingField("password".to_string()));
        }
        self.validate()
            .map_err(|_| SharedError::InvalidEmail(self.email.clone()))
    }
}

/// The signed-in dashboard operator, as kept in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl AuthenticatedUser {
    /// Uppercased first letter of the name, used when there is no avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
