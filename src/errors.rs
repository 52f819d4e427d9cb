//! Error types for motdesk
//!
//! Each error type has a corresponding error code for programmatic handling.

use serde_json::Value;
use thiserror::Error;

/// Message shown when the backend gives us nothing better.
pub const GENERIC_FAILURE_MESSAGE: &str = "Operation failed";

/// Result type alias for motdesk operations
pub type Result<T> = std::result::Result<T, MotdeskError>;

/// Main error type for all motdesk operations
#[derive(Debug, Error)]
pub enum MotdeskError {
    /// Input rejected before dispatch (unknown status, bad lead time, empty selection)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Target status equal to the current one or unreachable for the role
    #[error("State transition error: {0}")]
    Transition(String),

    /// Backend answered with a non-success status
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    /// Requested record does not exist (or was removed by another actor)
    #[error("Not found: {0}")]
    NotFound(String),

    /// The same control already has a request outstanding
    #[error("Request already in flight: {0}")]
    InFlight(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Transport failure talking to the backend
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl MotdeskError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            MotdeskError::Validation(_) => "VALIDATION",
            MotdeskError::Transition(_) => "STATE_TRANSITION",
            MotdeskError::Backend { .. } => "BACKEND_ERROR",
            MotdeskError::NotFound(_) => "NOT_FOUND",
            MotdeskError::InFlight(_) => "IN_FLIGHT",
            MotdeskError::ConfigError(_) => "CONFIG_ERROR",
            MotdeskError::InvalidJson(_) => "INVALID_JSON",
            MotdeskError::FileNotFound(_) => "FILE_NOT_FOUND",
            MotdeskError::Http(_) => "HTTP_ERROR",
            MotdeskError::Io(_) => "IO_ERROR",
            MotdeskError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        MotdeskError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }

    /// The single string shown to the operator in a notification.
    ///
    /// Backend and not-found errors show the backend's own text; transport
    /// failures collapse to the generic message.
    pub fn user_message(&self) -> String {
        match self {
            MotdeskError::Backend { message, .. } => message.clone(),
            MotdeskError::NotFound(message) => message.clone(),
            MotdeskError::Validation(message) | MotdeskError::Transition(message) => {
                message.clone()
            }
            MotdeskError::Http(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Extract the user-visible message from a backend error payload.
///
/// `{"message": ["a", "b"]}` becomes `"a, b"`, a string message is used as
/// is, anything else falls back to [`GENERIC_FAILURE_MESSAGE`].
pub fn backend_message(payload: &Value) -> String {
    let message = match payload.get("message") {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| match part {
                Value::String(text) => Some(text.trim().to_string()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    };

    if message.is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &MotdeskError) -> i32 {
    match error {
        MotdeskError::Validation(_) | MotdeskError::Transition(_) => 2,
        _ => 1,
    }
}
