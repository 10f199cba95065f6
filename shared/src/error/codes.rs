//! Unified error codes for the Bella Vista site
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Content errors
//! - 2xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that the JSON API and the
/// browser side agree on a compact, stable wire value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Resource not found
    NotFound = 3,

    // ==================== 1xxx: Content ====================
    /// Menu category not found
    CategoryNotFound = 1001,
    /// Menu item not found
    MenuItemNotFound = 1002,
    /// Bundled or on-disk content could not be loaded
    ContentLoadFailed = 1101,

    // ==================== 2xxx: Reservation ====================
    /// A required reservation field is empty
    RequiredFieldMissing = 2001,
    /// Party size outside the bookable range
    GuestsOutOfRange = 2002,
    /// A submission is already in flight for this form
    SubmissionInProgress = 2003,
    /// The reservation could not be submitted
    SubmissionFailed = 2004,
    /// Reservation form session not found
    FormNotFound = 2005,
    /// Too many open reservation forms
    FormCapacityReached = 2006,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::NotFound => "Resource not found",

            // Content
            ErrorCode::CategoryNotFound => "Menu category not found",
            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::ContentLoadFailed => "Site content could not be loaded",

            // Reservation
            ErrorCode::RequiredFieldMissing => "Required field is missing",
            ErrorCode::GuestsOutOfRange => "Number of guests must be between 1 and 8",
            ErrorCode::SubmissionInProgress => "A reservation is already being submitted",
            ErrorCode::SubmissionFailed => {
                "Sorry, there was an error submitting your reservation. Please try again or call us directly."
            }
            ErrorCode::FormNotFound => "Reservation form not found",
            ErrorCode::FormCapacityReached => "Too many open reservation forms, please try again later",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            3 => Ok(ErrorCode::NotFound),

            // Content
            1001 => Ok(ErrorCode::CategoryNotFound),
            1002 => Ok(ErrorCode::MenuItemNotFound),
            1101 => Ok(ErrorCode::ContentLoadFailed),

            // Reservation
            2001 => Ok(ErrorCode::RequiredFieldMissing),
            2002 => Ok(ErrorCode::GuestsOutOfRange),
            2003 => Ok(ErrorCode::SubmissionInProgress),
            2004 => Ok(ErrorCode::SubmissionFailed),
            2005 => Ok(ErrorCode::FormNotFound),
            2006 => Ok(ErrorCode::FormCapacityReached),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 12] = [
        ErrorCode::Success,
        ErrorCode::NotFound,
        ErrorCode::CategoryNotFound,
        ErrorCode::MenuItemNotFound,
        ErrorCode::ContentLoadFailed,
        ErrorCode::RequiredFieldMissing,
        ErrorCode::GuestsOutOfRange,
        ErrorCode::SubmissionInProgress,
        ErrorCode::SubmissionFailed,
        ErrorCode::FormNotFound,
        ErrorCode::FormCapacityReached,
        ErrorCode::InternalError,
    ];

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::CategoryNotFound.code(), 1001);
        assert_eq!(ErrorCode::ContentLoadFailed.code(), 1101);
        assert_eq!(ErrorCode::RequiredFieldMissing.code(), 2001);
        assert_eq!(ErrorCode::SubmissionFailed.code(), 2004);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_every_code_converts_back() {
        for code in ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::NotFound).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&ErrorCode::SubmissionInProgress).unwrap(),
            "2003"
        );
        let code: ErrorCode = serde_json::from_str("2005").unwrap();
        assert_eq!(code, ErrorCode::FormNotFound);
        assert!(serde_json::from_str::<ErrorCode>("999").is_err());
    }

    #[test]
    fn test_submission_failed_message_is_user_facing() {
        assert!(ErrorCode::SubmissionFailed.message().contains("call us directly"));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::GuestsOutOfRange), "2002");
    }
}
