//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Toolshop                               │
//! │                                                                         │
//! │  Host UI                     Rust Backend                               │
//! │  ───────                     ────────────                               │
//! │                                                                         │
//! │  {"command":"add_to_cart", ...}                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  commands::invoke                                                │  │
//! │  │  Result<Value, ApiError>                                         │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Unknown name / bad args? ─── ApiError (UNKNOWN_COMMAND, ...) ──┐│  │
//! │  │         │                                                       ││  │
//! │  │         ▼                                                       ▼│  │
//! │  │  Store error? ─── CoreError::ProductNotFound ──────► ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"NOT_FOUND","message":"Product ..."}}     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use toolshop_core::CoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed (including malformed command arguments)
    ValidationError,

    /// Bad credentials or missing login
    Unauthorized,

    /// Request was well-formed but breaks a rule (cycle, empty cart, ...)
    BusinessLogic,

    /// No command with that name
    UnknownCommand,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn business(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BusinessLogic, message)
    }

    pub fn unknown_command(name: &str) -> Self {
        ApiError::new(ErrorCode::UnknownCommand, format!("Unknown command: {}", name))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        let code = match err {
            CoreError::ProductNotFound(_)
            | CoreError::CategoryNotFound(_)
            | CoreError::MenuNotFound(_)
            | CoreError::MenuItemNotFound(_)
            | CoreError::OrderNotFound(_)
            | CoreError::ShippingMethodNotFound(_)
            | CoreError::PaymentMethodNotFound(_) => ErrorCode::NotFound,
            CoreError::InvalidCredentials | CoreError::NotAuthorized(_) => ErrorCode::Unauthorized,
            CoreError::HierarchyCycle { .. } | CoreError::EmptyCart => ErrorCode::BusinessLogic,
            CoreError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError { code, message }
    }
}

/// Malformed command arguments.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::validation(format!("Invalid arguments: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
