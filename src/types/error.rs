//! Error envelope returned by the API on failure

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};

/// `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorBody,
}

/// Error detail structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: String,
    /// Serialized as `null` when absent.
    pub code: Option<String>,
}

impl ApiError {
    pub fn new(
        message: impl Into<String>,
        error_type: impl Into<String>,
        code: Option<String>,
    ) -> Self {
        Self {
            error: ApiErrorBody {
                message: message.into(),
                error_type: error_type.into(),
                code,
            },
        }
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }

    pub fn error_type(&self) -> &str {
        &self.error.error_type
    }

    pub fn code(&self) -> Option<&str> {
        self.error.code.as_deref()
    }
}

impl From<&SchemaError> for ApiError {
    fn from(err: &SchemaError) -> Self {
        Self::new(
            err.to_string(),
            err.api_error_type(),
            Some(err.code().to_string()),
        )
    }
}

impl From<SchemaError> for ApiError {
    fn from(err: SchemaError) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error.code {
            Some(code) => write!(f, "{} ({}): {}", self.error.error_type, code, self.error.message),
            None => write!(f, "{}: {}", self.error.error_type, self.error.message),
        }
    }
}
