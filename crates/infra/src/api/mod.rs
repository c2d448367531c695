//! ChronoDesk API client
//!
//! Every resource client goes through [`ApiClient`], which owns the single
//! authenticated-request policy:
//!
//! - the token comes from an injected [`TokenStore`]; when it is absent the
//!   call fails with [`ApiError::MissingToken`] before any I/O
//! - requests carry `Authorization: Bearer <token>` and JSON headers
//! - 2xx responses are unwrapped from the `{ "data": .. }` envelope
//! - non-2xx responses become [`ApiError::Status`] with the server's
//!   `message` (or a fixed fallback), the status and the raw body
//!
//! There is no retry, caching or request deduplication.

pub mod auth;
pub mod client;
pub mod envelope;
pub mod errors;

pub use auth::{
    token_store_from_config, FileTokenStore, KeychainTokenStore, MemoryTokenStore, TokenStore,
};
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use envelope::Envelope;
pub use errors::{ApiError, ApiErrorCategory};
