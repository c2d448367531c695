//! Notification commands.

use std::sync::Arc;

use chronodesk_domain::{Notification, Result};

use crate::context::AppContext;
use crate::page::Page;
use crate::utils::command_helpers::execute_command;

pub async fn list_notifications(ctx: &AppContext, unread_only: bool) -> Result<Vec<Notification>> {
    execute_command("notifications::list", || ctx.notifications.list(unread_only)).await
}

pub async fn unread_notification_count(ctx: &AppContext) -> Result<u32> {
    execute_command("notifications::unread_count", || ctx.notifications.unread_count()).await
}

pub async fn mark_notification_read(ctx: &AppContext, id: i64) -> Result<Notification> {
    execute_command("notifications::mark_as_read", || ctx.notifications.mark_as_read(id)).await
}

pub async fn mark_all_notifications_read(ctx: &AppContext) -> Result<()> {
    execute_command("notifications::mark_all_as_read", || ctx.notifications.mark_all_as_read()).await
}

pub fn notifications_page(ctx: &Arc<AppContext>, unread_only: bool) -> Page<Vec<Notification>> {
    let ctx = Arc::clone(ctx);
    Page::new("notifications::page", move || {
        let ctx = Arc::clone(&ctx);
        async move { ctx.notifications.list(unread_only).await }
    })
}
