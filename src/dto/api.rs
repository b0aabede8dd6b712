//! Error body returned by the API on failure.

use serde::Serialize;

/// Category of an API failure.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorType {
    ValidationError,
    NotFoundError,
    InternalError,
}

/// Structured error payload: `{type, code, message, details}`.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct ApiError {
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            code: None,
            message: message.into(),
            details: None,
        }
    }
}
