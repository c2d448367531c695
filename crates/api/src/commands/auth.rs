//! Session commands.

use chronodesk_domain::{LoginRequest, Result, UserProfile};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_command;

/// Sign in and persist the session token.
pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<UserProfile> {
    let request = LoginRequest { email: email.to_string(), password: password.to_string() };
    let response = execute_command("auth::login", || ctx.auth.login(&request)).await?;
    Ok(response.user)
}

/// Sign out. The local token is gone afterwards even if this returns an error.
pub async fn logout(ctx: &AppContext) -> Result<()> {
    execute_command("auth::logout", || ctx.auth.logout()).await
}

pub async fn current_user(ctx: &AppContext) -> Result<UserProfile> {
    execute_command("auth::current_user", || ctx.auth.me()).await
}
