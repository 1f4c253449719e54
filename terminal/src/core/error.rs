//! # Common Error Types
//!
//! Consolidated error handling for the bank client.
//!
//! Two error types live here:
//!
//! - [`ApiError`]: what a single remote call can fail with. Screens turn it into
//!   an inline message with [`ApiError::user_message`].
//! - [`AppError`]: session persistence and configuration failures. Form
//!   validation never reaches here; it is reported inline by
//!   [`crate::utils::validation`].
//!
//! ## Error Taxonomy for Remote Calls
//!
//! | Variant | Cause | Shown as |
//! |---|---|---|
//! | `Network` | connection refused, DNS, timeout | fixed connection message |
//! | `Status` | non-success HTTP status | body `message` verbatim, else the screen's generic text |
//! | `Decode` | success status, malformed body | the screen's generic text |
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use bank_terminal::core::error::ApiError;
//!
//! let err = ApiError::Status { status: 409, message: Some("Email already taken".to_string()) };
//! assert_eq!(err.user_message("Registration failed"), "Email already taken");
//!
//! let err = ApiError::Status { status: 500, message: None };
//! assert_eq!(err.user_message("Registration failed"), "Registration failed");
//! ```

use thiserror::Error;

/// Inline message for any connectivity failure, regardless of screen.
pub const CONNECTION_ERROR: &str = "Connection error: could not reach the server";

/// Failure of one remote API call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    ///
    /// `message` is the body's `message` field when the body was JSON and had one.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// Success status but the body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text to show inline on the screen that issued the call.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Network(_) => CONNECTION_ERROR.to_string(),
            ApiError::Status { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            ApiError::Status { .. } | ApiError::Decode(_) => fallback.to_string(),
        }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Transport failures are `Network`; a body that fails to decode is `Decode`.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Application-wide error type for everything that is not a remote call.
#[derive(Debug, Error)]
pub enum AppError {
    /// Session store could not be read or written.
    #[error("Session error: {0}")]
    Session(String),

    /// Invalid or missing configuration.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_uses_fixed_message() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message("Login failed"), CONNECTION_ERROR);
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_error_prefers_body_message() {
        let err = ApiError::Status {
            status: 401,
            message: Some("Invalid password".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "Invalid password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_blank_body_message_falls_back() {
        let err = ApiError::Status {
            status: 400,
            message: Some("   ".to_string()),
        };
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn test_decode_error_falls_back() {
        let err = ApiError::Decode("expected value".to_string());
        assert_eq!(err.user_message("Could not load customer data"), "Could not load customer data");
    }

    #[test]
    fn test_io_and_json_failures_are_session_errors() {
        let err = AppError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));
        assert!(matches!(err, AppError::Session(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(AppError::from(json_err), AppError::Session(_)));
    }
}
