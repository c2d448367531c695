//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use chronodesk_domain::{ChronoDeskError, Result as DomainResult};
use chronodesk_infra::api::ApiError;
use tracing::warn;

use crate::utils::logging::log_command_execution;

/// Execute a command with automatic timing and logging
///
/// Times the call, emits one `command_execution_*` event, and converts the
/// [`ApiError`] into a [`ChronoDeskError`] for the caller.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn get_dashboard(ctx: &AppContext, company_id: Option<i64>) -> Result<DashboardData> {
///     execute_command("dashboard::get_dashboard", || ctx.dashboard.get_dashboard_data(company_id))
///         .await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let start = Instant::now();

    let result = command_fn().await.map_err(ChronoDeskError::from);

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    if let Err(err) = &result {
        warn!(command = command_name, error_type = err.label(), error = %err, "command failed");
    }

    result
}
