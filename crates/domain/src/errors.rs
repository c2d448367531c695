//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for ChronoDesk
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ChronoDeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The server rejected the request; the message is user-facing as-is.
    /// `body` is the raw response, e.g. per-field validation errors.
    #[error("{message}")]
    Api { status: u16, message: String, body: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChronoDeskError {
    /// Stable label suitable for structured logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Auth(_) => "auth",
            Self::NotFound(_) => "not_found",
            Self::InvalidInput(_) => "invalid_input",
            Self::Storage(_) => "storage",
            Self::Api { .. } => "api",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for ChronoDesk operations
pub type Result<T> = std::result::Result<T, ChronoDeskError>;
