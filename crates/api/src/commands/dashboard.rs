//! Dashboard commands.

use std::sync::Arc;

use chronodesk_domain::{DashboardData, Result};

use crate::context::AppContext;
use crate::page::Page;
use crate::utils::command_helpers::execute_command;

/// Fetch dashboard aggregates, scoped to `company_id` when given.
pub async fn get_dashboard(ctx: &AppContext, company_id: Option<i64>) -> Result<DashboardData> {
    execute_command("dashboard::get_dashboard", || ctx.dashboard.get_dashboard_data(company_id)).await
}

pub fn dashboard_page(ctx: &Arc<AppContext>, company_id: Option<i64>) -> Page<DashboardData> {
    let ctx = Arc::clone(ctx);
    Page::new("dashboard::page", move || {
        let ctx = Arc::clone(&ctx);
        async move { ctx.dashboard.get_dashboard_data(company_id).await }
    })
}
