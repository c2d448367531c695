//! API-specific error types
//!
//! Every failure keeps enough structure (status, raw body) for callers to
//! tell authentication, validation and server failures apart without
//! matching on message text.

use std::time::Duration;

use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// No token, 401 or 403
    Authentication,
    /// 400, 422, or an input rejected before sending
    Validation,
    /// 404
    NotFound,
    /// 429
    RateLimit,
    /// 5xx
    Server,
    /// Any other 4xx
    Client,
    /// Connection failures and timeouts
    Network,
    /// 2xx body that does not match the expected payload
    Decode,
    /// Local setup problems (configuration, token storage)
    Config,
}

/// API operation errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token in the store; raised before any request is sent.
    #[error("Not authenticated: no session token available")]
    MissingToken,

    /// Non-2xx response. `message` is already user-facing.
    #[error("{message}")]
    Status { status: u16, message: String, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Malformed response: {0}")]
    Decode(String),

    /// Request input rejected locally; nothing was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::MissingToken => ApiErrorCategory::Authentication,
            Self::Status { status, .. } => match status {
                401 | 403 => ApiErrorCategory::Authentication,
                400 | 422 => ApiErrorCategory::Validation,
                404 => ApiErrorCategory::NotFound,
                429 => ApiErrorCategory::RateLimit,
                500..=599 => ApiErrorCategory::Server,
                _ => ApiErrorCategory::Client,
            },
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::InvalidInput(_) => ApiErrorCategory::Validation,
            Self::Config(_) | Self::Storage(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when the server answered
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// True when the user has to log in (again)
    pub fn is_auth_failure(&self) -> bool {
        self.category() == ApiErrorCategory::Authentication
    }
}
