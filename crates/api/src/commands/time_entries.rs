//! Time entry commands.

use std::sync::Arc;

use chronodesk_domain::{ClockInRequest, Result, TimeEntry, TimeEntryFilter};

use crate::context::AppContext;
use crate::page::Page;
use crate::utils::command_helpers::execute_command;

pub async fn list_time_entries(ctx: &AppContext, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>> {
    execute_command("time_entries::list", || ctx.time_entries.list(filter)).await
}

pub async fn clock_in(ctx: &AppContext, request: &ClockInRequest) -> Result<TimeEntry> {
    execute_command("time_entries::clock_in", || ctx.time_entries.clock_in(request)).await
}

pub async fn clock_out(ctx: &AppContext, entry_id: i64) -> Result<TimeEntry> {
    execute_command("time_entries::clock_out", || ctx.time_entries.clock_out(entry_id)).await
}

pub fn time_entries_page(ctx: &Arc<AppContext>, filter: TimeEntryFilter) -> Page<Vec<TimeEntry>> {
    let ctx = Arc::clone(ctx);
    Page::new("time_entries::page", move || {
        let ctx = Arc::clone(&ctx);
        let filter = filter.clone();
        async move { ctx.time_entries.list(&filter).await }
    })
}
