//! Calendar commands.

use std::sync::Arc;

use chronodesk_domain::{CalendarEvent, CalendarQuery, ChronoDeskError, Result};

use crate::context::AppContext;
use crate::page::Page;
use crate::utils::command_helpers::execute_command;

/// Events in the query window, ordered by start time.
///
/// An inverted window is rejected locally.
pub async fn list_calendar_events(ctx: &AppContext, query: &CalendarQuery) -> Result<Vec<CalendarEvent>> {
    if query.end < query.start {
        return Err(ChronoDeskError::InvalidInput("calendar window ends before it starts".into()));
    }

    let mut events =
        execute_command("calendar::list_events", || ctx.calendar.list_events(query)).await?;
    events.sort_by_key(|event| event.start);
    Ok(events)
}

pub fn calendar_page(ctx: &Arc<AppContext>, query: CalendarQuery) -> Page<Vec<CalendarEvent>> {
    let ctx = Arc::clone(ctx);
    Page::new("calendar::page", move || {
        let ctx = Arc::clone(&ctx);
        let query = query.clone();
        async move { ctx.calendar.list_events(&query).await }
    })
}
