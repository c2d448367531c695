//! Application context - dependency injection container

use std::sync::Arc;

use chronodesk_domain::{Config, Result};
use chronodesk_infra::api::{token_store_from_config, ApiClient, ApiClientConfig, TokenStore};
use chronodesk_infra::config;
use chronodesk_infra::services::{
    AuthService, CalendarService, CompanySettingsService, DashboardService, NotificationService,
    RoleService, SchedulerService, ShiftService, TimeEntryService, UserService,
};

use crate::page::SessionState;

/// Application context - holds all services and dependencies
///
/// Every resource client shares one [`ApiClient`], and through it one token
/// store, so a login performed via `auth` is immediately visible to the rest.
pub struct AppContext {
    pub config: Config,
    pub tokens: Arc<dyn TokenStore>,
    pub api: Arc<ApiClient>,

    // Resource clients
    pub auth: AuthService,
    pub dashboard: DashboardService,
    pub company_settings: CompanySettingsService,
    pub users: UserService,
    pub roles: RoleService,
    pub shifts: ShiftService,
    pub notifications: NotificationService,
    pub scheduler: SchedulerService,
    pub calendar: CalendarService,
    pub time_entries: TimeEntryService,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("base_url", &self.config.api.base_url)
            .field("store", &self.config.session.store)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Create a new application context from the probed config file and
    /// environment
    pub fn new() -> Result<Self> {
        Self::new_with_config(config::load()?)
    }

    /// Create a new application context with custom configuration
    ///
    /// The token store is the one selected by `config.session`.
    pub fn new_with_config(config: Config) -> Result<Self> {
        let tokens = token_store_from_config(&config.session);
        Self::new_with_token_store(config, tokens)
    }

    /// Create a new application context around an existing token store
    ///
    /// Tests use this to inject a [`MemoryTokenStore`](chronodesk_infra::api::MemoryTokenStore).
    pub fn new_with_token_store(config: Config, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let api = Arc::new(ApiClient::new(ApiClientConfig::from(&config.api), Arc::clone(&tokens))?);
        tracing::info!(base_url = %config.api.base_url, "application context initialised");

        Ok(Self {
            auth: AuthService::new(Arc::clone(&api)),
            dashboard: DashboardService::new(Arc::clone(&api)),
            company_settings: CompanySettingsService::new(Arc::clone(&api)),
            users: UserService::new(Arc::clone(&api)),
            roles: RoleService::new(Arc::clone(&api)),
            shifts: ShiftService::new(Arc::clone(&api)),
            notifications: NotificationService::new(Arc::clone(&api)),
            scheduler: SchedulerService::new(Arc::clone(&api)),
            calendar: CalendarService::new(Arc::clone(&api)),
            time_entries: TimeEntryService::new(Arc::clone(&api)),
            config,
            tokens,
            api,
        })
    }

    /// Snapshot of whether a session token is currently held
    pub async fn session(&self) -> SessionState {
        SessionState::from_store(self.tokens.as_ref()).await
    }
}
