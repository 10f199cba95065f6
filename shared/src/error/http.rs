//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::CategoryNotFound
            | Self::MenuItemNotFound
            | Self::FormNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::SubmissionInProgress => StatusCode::CONFLICT,

            // 502 Bad Gateway (reservation backend refused or failed)
            Self::SubmissionFailed => StatusCode::BAD_GATEWAY,

            // 503 Service Unavailable (transient, client can retry)
            Self::FormCapacityReached => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::ContentLoadFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (form input refused)
            Self::RequiredFieldMissing | Self::GuestsOutOfRange => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::CategoryNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::FormNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_reservation_statuses() {
        assert_eq!(
            ErrorCode::RequiredFieldMissing.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::GuestsOutOfRange.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::SubmissionInProgress.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::SubmissionFailed.http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_system_statuses() {
        assert_eq!(
            ErrorCode::ContentLoadFailed.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::FormCapacityReached.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
