//! # API Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kiosk POS                              │
//! │                                                                         │
//! │  input line                                                             │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  Parse Error? ──────── ApiError::parse("...") ─────────────┐           │
//! │      │                                                      │           │
//! │      ▼                                                      ▼           │
//! │  Command Function ──── CoreError ──► From ──────────────► ApiError     │
//! │      │                                                      │           │
//! │      ▼                                                      ▼           │
//! │  Response ─────────────────────────────────────────────► Renderer      │
//! │                                                                         │
//! │  Every error ends the current command only; the session continues.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## JSON Output
//! In JSON mode a failed command is written as:
//! ```json
//! {
//!   "error": { "code": "NOT_FOUND", "message": "Invalid order id: #7" }
//! }
//! ```

use kiosk_core::{CoreError, ErrorKind};
use serde::Serialize;

/// API error returned from console commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown order id or product position
    NotFound,

    /// Bad product name, size or stuffing
    ValidationError,

    /// Operation not allowed in the current order state
    InvalidState,

    /// No orders exist yet
    NoOrders,

    /// The input line is not a command
    ParseError,

    /// Terminal I/O or serialization failure
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ParseError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match err.kind() {
            ErrorKind::Validation => ErrorCode::ValidationError,
            ErrorKind::State => ErrorCode::InvalidState,
            ErrorKind::Lookup => ErrorCode::NotFound,
            ErrorKind::EmptyCollection => ErrorCode::NoOrders,
        };
        let message = match err {
            CoreError::Validation(inner) => inner.to_string(),
            other => other.to_string(),
        };
        ApiError::new(code, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
