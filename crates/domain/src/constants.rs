//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const API_BASE_URL_ENV: &str = "CHRONODESK_API_URL";

/// Storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_KEYCHAIN_SERVICE: &str = "ChronoDesk.api";
pub const DEFAULT_TOKEN_FILE: &str = "chronodesk-session.json";

/// Shown when a failed response carries no usable `message`.
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

// Calendar event types accepted by the backend
pub const CALENDAR_EVENT_TYPES: [&str; 4] = ["time_entry", "holiday", "absence", "shift"];
