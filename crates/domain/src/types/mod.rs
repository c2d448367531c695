//! Domain types and models
//!
//! Every type here mirrors a backend resource. The server owns the
//! lifecycle; the client only reads and submits partial updates.

pub mod auth;
pub mod calendar;
pub mod company;
pub mod dashboard;
pub mod notification;
pub mod role;
pub mod scheduler;
pub mod shift;
pub mod time_entry;
pub mod user;

use crate::errors::Result;

pub use auth::{LoginRequest, LoginResponse};
pub use calendar::{CalendarEvent, CalendarEventType, CalendarQuery};
pub use company::{CompanySettings, CompanySettingsUpdate};
pub use dashboard::{DashboardData, DashboardStats, EmployeeAggregate, StatusSlice, TimeSeriesPoint};
pub use notification::{Notification, UnreadCount};
pub use role::{Permission, Role, RoleInput};
pub use scheduler::{ReminderLog, ReminderStatus, ScheduledTask, TaskStatus};
pub use shift::{ShiftTemplate, ShiftTemplateInput};
pub use time_entry::{ClockInRequest, TimeEntry, TimeEntryFilter, TimeEntryInput, TimeEntryStatus};
pub use user::{UserInput, UserPreferences, UserProfile, UserRole, UserUpdate};

/// Invariant check applied to payloads the server sends back and to
/// inputs before they are submitted
pub trait Validate {
    /// # Errors
    /// `ChronoDeskError::InvalidInput` naming the offending record.
    fn validate(&self) -> Result<()>;
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self) -> Result<()> {
        self.iter().try_for_each(Validate::validate)
    }
}
