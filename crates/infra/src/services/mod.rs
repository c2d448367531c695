//! Resource clients
//!
//! One client per backend resource. Each is a thin, stateless wrapper that
//! maps typed calls onto [`ApiClient`](crate::api::ApiClient) requests.
//! Nothing is cached.
//!
//! Types with domain invariants are checked at the boundary: a response
//! that breaks one fails with [`ApiError::Decode`], and an input that breaks
//! one fails with [`ApiError::InvalidInput`] before any request is sent.

pub mod auth_service;
pub mod calendar_service;
pub mod company_settings_service;
pub mod dashboard_service;
pub mod notification_service;
pub mod role_service;
pub mod scheduler_service;
pub mod shift_service;
pub mod time_entry_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use calendar_service::CalendarService;
pub use company_settings_service::CompanySettingsService;
pub use dashboard_service::DashboardService;
pub use notification_service::NotificationService;
pub use role_service::RoleService;
pub use scheduler_service::SchedulerService;
pub use shift_service::ShiftService;
pub use time_entry_service::TimeEntryService;
pub use user_service::UserService;

use chronodesk_domain::{ChronoDeskError, Validate};

use crate::api::ApiError;

/// Pass a response payload through only if it satisfies its invariants.
pub(crate) fn checked<T: Validate>(payload: T) -> Result<T, ApiError> {
    payload
        .validate()
        .map_err(|err| ApiError::Decode(format!("payload breaks invariant: {}", reason(err))))?;
    Ok(payload)
}

/// Refuse to submit an input that breaks its invariants.
pub(crate) fn ensure_valid<T: Validate>(input: &T) -> Result<(), ApiError> {
    input.validate().map_err(|err| ApiError::InvalidInput(reason(err)))
}

fn reason(err: ChronoDeskError) -> String {
    match err {
        ChronoDeskError::InvalidInput(message) => message,
        other => other.to_string(),
    }
}
