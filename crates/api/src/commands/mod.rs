//! Commands - one async entry point per user-facing action
//!
//! Each command delegates to a resource client through
//! [`execute_command`](crate::utils::command_helpers::execute_command) and
//! returns domain errors. Page constructors wrap the same reads in a
//! [`Page`](crate::page::Page).

mod auth;
mod calendar;
mod company_settings;
mod dashboard;
mod notifications;
mod time_entries;

pub use auth::*;
pub use calendar::*;
pub use company_settings::*;
pub use dashboard::*;
pub use notifications::*;
pub use time_entries::*;
