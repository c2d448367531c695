//! Company settings client.

use std::sync::Arc;

use chronodesk_domain::{CompanySettings, CompanySettingsUpdate};
use tracing::{debug, instrument};

use crate::api::{ApiClient, ApiError};

/// Client for `/companies/{id}/settings`
#[derive(Debug, Clone)]
pub struct CompanySettingsService {
    client: Arc<ApiClient>,
}

impl CompanySettingsService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Settings of one company
    #[instrument(skip(self))]
    pub async fn get_settings(&self, company_id: i64) -> Result<CompanySettings, ApiError> {
        self.client.get(&format!("/companies/{company_id}/settings"), &[]).await
    }

    /// Submit a partial update; only the fields set on `update` are sent.
    #[instrument(skip(self, update))]
    pub async fn update_settings(
        &self,
        company_id: i64,
        update: &CompanySettingsUpdate,
    ) -> Result<CompanySettings, ApiError> {
        debug!(company_id, empty = update.is_empty(), "updating company settings");
        self.client.put(&format!("/companies/{company_id}/settings"), update).await
    }
}
