//! Company settings commands.

use std::sync::Arc;

use chronodesk_domain::{CompanySettings, CompanySettingsUpdate, Result};

use crate::context::AppContext;
use crate::page::Page;
use crate::utils::command_helpers::execute_command;

pub async fn get_company_settings(ctx: &AppContext, company_id: i64) -> Result<CompanySettings> {
    execute_command("company_settings::get", || ctx.company_settings.get_settings(company_id)).await
}

/// Apply a partial update and return the settings as stored by the server.
pub async fn update_company_settings(
    ctx: &AppContext,
    company_id: i64,
    update: &CompanySettingsUpdate,
) -> Result<CompanySettings> {
    execute_command("company_settings::update", || {
        ctx.company_settings.update_settings(company_id, update)
    })
    .await
}

pub fn company_settings_page(ctx: &Arc<AppContext>, company_id: i64) -> Page<CompanySettings> {
    let ctx = Arc::clone(ctx);
    Page::new("company_settings::page", move || {
        let ctx = Arc::clone(&ctx);
        async move { ctx.company_settings.get_settings(company_id).await }
    })
}
