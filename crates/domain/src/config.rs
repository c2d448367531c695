//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_ERROR_MESSAGE,
    DEFAULT_KEYCHAIN_SERVICE, DEFAULT_TOKEN_FILE,
};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

/// Remote API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
    /// Message used when an error response has no `message` field.
    pub fallback_error_message: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_API_TIMEOUT_SECS,
            user_agent: None,
            fallback_error_message: DEFAULT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Where the bearer token is persisted between runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TokenStoreKind {
    /// Process memory only; lost on exit
    Memory,
    /// JSON file on disk
    #[default]
    File,
    /// Platform keychain
    Keychain,
}

impl std::str::FromStr for TokenStoreKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "file" => Ok(Self::File),
            "keychain" => Ok(Self::Keychain),
            other => Err(format!("unknown token store '{other}'")),
        }
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub store: TokenStoreKind,
    pub token_path: String,
    pub keychain_service: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store: TokenStoreKind::default(),
            token_path: DEFAULT_TOKEN_FILE.to_string(),
            keychain_service: DEFAULT_KEYCHAIN_SERVICE.to_string(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `chronodesk_infra=debug`
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}
