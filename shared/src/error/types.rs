//! Error types and API response structures

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for the site, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details (missing fields, offending values, ...)
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        let r = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", r))
            .with_detail("resource", r)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a content loading error naming the offending document
    pub fn content_load(document: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        let document = document.into();
        Self::with_message(
            ErrorCode::ContentLoadFailed,
            format!("Failed to load {}: {}", document, reason),
        )
        .with_detail("document", document)
    }

    /// Create a category not found error
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::CategoryNotFound).with_detail("category_id", id.into())
    }

    /// Create a menu item not found error
    pub fn menu_item_not_found(id: impl Into<String>) -> Self {
        Self::new(ErrorCode::MenuItemNotFound).with_detail("item_id", id.into())
    }

    /// Create a required-field error listing every empty field
    pub fn required_fields(fields: &[&str]) -> Self {
        Self::with_message(
            ErrorCode::RequiredFieldMissing,
            format!("Please fill in: {}", fields.join(", ")),
        )
        .with_detail("fields", fields.to_vec())
    }

    /// Create a party-size error
    pub fn guests_out_of_range(value: impl Into<String>) -> Self {
        Self::new(ErrorCode::GuestsOutOfRange).with_detail("guests", value.into())
    }

    /// Create a submission-in-progress error
    pub fn submission_in_progress() -> Self {
        Self::new(ErrorCode::SubmissionInProgress)
    }

    /// Create the single user-facing submission failure
    pub fn submission_failed() -> Self {
        Self::new(ErrorCode::SubmissionFailed)
    }

    /// Create a form capacity error
    pub fn form_capacity_reached(capacity: usize) -> Self {
        Self::new(ErrorCode::FormCapacityReached).with_detail("capacity", capacity)
    }

    /// Create a form not found error
    pub fn form_not_found(id: impl std::fmt::Display) -> Self {
        Self::new(ErrorCode::FormNotFound).with_detail("form_id", id.to_string())
    }
}

/// Unified API response structure
///
/// Provides a consistent response format for all JSON endpoints:
/// - `code`: Error code (0 for success)
/// - `message`: Human-readable message
/// - `data`: Response payload (on success)
/// - `details`: Additional error details (on failure)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Error code (0 for success, non-zero for errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// Human-readable message
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Additional error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }

    /// Create a success response with custom message and data
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: Some(0),
            message: message.into(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response from an AppError
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ApiResponse::<()>::error(&self);

        // Log system errors
        if matches!(self.code.category(), super::category::ErrorCategory::System) {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        use super::codes::ErrorCode;
        use axum::Json;

        let status = match self.code {
            None | Some(0) => http::StatusCode::OK,
            Some(code) => ErrorCode::try_from(code)
                .map(|c| c.http_status())
                .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR),
        };

        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::NotFound);
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Resource not found");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::new(ErrorCode::RequiredFieldMissing)
            .with_detail("field", "email")
            .with_detail("reason", "required");

        assert_eq!(err.code, ErrorCode::RequiredFieldMissing);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "email");
        assert_eq!(details.get("reason").unwrap(), "required");
    }

    #[test]
    fn test_required_fields_lists_every_field() {
        let err = AppError::required_fields(&["name", "date"]);
        assert_eq!(err.code, ErrorCode::RequiredFieldMissing);
        assert_eq!(err.message, "Please fill in: name, date");
        let details = err.details.unwrap();
        assert_eq!(
            details.get("fields").unwrap(),
            &serde_json::json!(["name", "date"])
        );
    }

    #[test]
    fn test_content_load_names_document() {
        let err = AppError::content_load("menu.json", "expected value at line 1");
        assert_eq!(err.code, ErrorCode::ContentLoadFailed);
        assert!(err.message.starts_with("Failed to load menu.json"));
        assert_eq!(err.details.unwrap().get("document").unwrap(), "menu.json");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::category_not_found("desserts").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::submission_in_progress().http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Page not found");
        assert_eq!(format!("{}", err), "Page not found");
    }

    #[test]
    fn test_api_response_success() {
        let response = ApiResponse::success(42);
        assert_eq!(response.code, Some(0));
        assert_eq!(response.message, "OK");
        assert_eq!(response.data, Some(42));
        assert!(response.details.is_none());
    }

    #[test]
    fn test_api_response_error() {
        let err = AppError::form_not_found("abc");
        let response = ApiResponse::<()>::error(&err);

        assert_eq!(response.code, Some(2005));
        assert_eq!(response.message, "Reservation form not found");
        assert!(response.data.is_none());
        assert!(response.details.is_some());
    }

    #[test]
    fn test_api_response_serialize() {
        let response = ApiResponse::success("hello");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"code\":0"));
        assert!(json.contains("\"message\":\"OK\""));
        assert!(json.contains("\"data\":\"hello\""));
        assert!(!json.contains("details"));
    }
}
