//! Conversions from external infrastructure errors into ChronoDesk errors.

use chronodesk_domain::ChronoDeskError;
use keyring::Error as KeyringError;
use reqwest::Error as HttpError;

use crate::api::ApiError;

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        if err.is_builder() {
            return ApiError::Config(format!("invalid HTTP request: {err}"));
        }

        if err.is_timeout() {
            return ApiError::Network("HTTP request timed out".into());
        }

        if err.is_connect() {
            return ApiError::Network(format!("HTTP connection failure: {err}"));
        }

        if err.is_decode() || err.is_body() {
            return ApiError::Decode(format!("failed to read response body: {err}"));
        }

        ApiError::Network(err.to_string())
    }
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl From<KeyringError> for ApiError {
    fn from(err: KeyringError) -> Self {
        let description = err.to_string();

        match err {
            KeyringError::BadEncoding(_) => {
                ApiError::Storage("session token in keychain is not valid UTF-8".into())
            }
            KeyringError::NoStorageAccess(inner) => {
                ApiError::Storage(format!("unable to access secure storage: {inner}"))
            }
            KeyringError::PlatformFailure(inner) => {
                ApiError::Storage(format!("keychain platform error: {inner}"))
            }
            _ => ApiError::Storage(description),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ApiError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(format!("session file I/O failed: {err}"))
    }
}

/* -------------------------------------------------------------------------- */
/* ApiError → ChronoDeskError */
/* -------------------------------------------------------------------------- */

impl From<ApiError> for ChronoDeskError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingToken => ChronoDeskError::Auth(err.to_string()),
            ApiError::Status { status: 401 | 403, message, .. } => ChronoDeskError::Auth(message),
            ApiError::Status { status: 404, message, .. } => ChronoDeskError::NotFound(message),
            ApiError::Status { status, message, body } => ChronoDeskError::Api { status, message, body },
            ApiError::Network(_) | ApiError::Timeout(_) => ChronoDeskError::Network(err.to_string()),
            ApiError::Decode(_) => ChronoDeskError::Internal(err.to_string()),
            ApiError::InvalidInput(message) => ChronoDeskError::InvalidInput(message),
            ApiError::Config(message) => ChronoDeskError::Config(message),
            ApiError::Storage(message) => ChronoDeskError::Storage(message),
        }
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
