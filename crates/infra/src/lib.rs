//! # ChronoDesk Infrastructure
//!
//! HTTP plumbing and resource clients for the ChronoDesk backend.
//!
//! This crate contains:
//! - The HTTP transport wrapper
//! - The authenticated API client and its structured error type
//! - Token stores (memory, file, keychain)
//! - One resource client per backend resource
//! - Configuration loading
//!
//! ## Architecture
//! - Depends on `chronodesk-domain` only
//! - Contains all "impure" code (network, filesystem, keychain)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod services;

// Re-export commonly used items
pub use api::{
    token_store_from_config, ApiClient, ApiClientBuilder, ApiClientConfig, ApiError,
    ApiErrorCategory, Envelope, FileTokenStore, KeychainTokenStore, MemoryTokenStore, TokenStore,
};
pub use http::{HttpClient, HttpClientBuilder};
pub use services::{
    AuthService, CalendarService, CompanySettingsService, DashboardService, NotificationService,
    RoleService, SchedulerService, ShiftService, TimeEntryService, UserService,
};
