use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

use crate::session::StorageError;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

impl From<StorageError> for SharedError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unauthorized_displays_bare_message() {
        let err = SharedError::Unauthorized("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_json_error_becomes_conversion() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: SharedError = json_err.into();
        assert!(matches!(err, SharedError::Conversion(_)));
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: SharedError = StorageError::NotAvailable("localStorage".to_string()).into();
        assert_eq!(err, SharedError::Storage("Storage not available: localStorage".to_string()));
    }
}
