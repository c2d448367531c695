//! Dashboard aggregates client.

use std::sync::Arc;

use chronodesk_domain::DashboardData;
use tracing::instrument;

use super::checked;
use crate::api::{ApiClient, ApiError};

/// Client for `GET /dashboard`
#[derive(Debug, Clone)]
pub struct DashboardService {
    client: Arc<ApiClient>,
}

impl DashboardService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch dashboard data, optionally scoped to one company.
    ///
    /// `company_id` is sent as a query parameter only when present; without
    /// it the server scopes to the caller's own company. Aggregates with
    /// negative hours are rejected as [`ApiError::Decode`].
    #[instrument(skip(self))]
    pub async fn get_dashboard_data(&self, company_id: Option<i64>) -> Result<DashboardData, ApiError> {
        let query: Vec<(&str, String)> =
            company_id.map(|id| ("company_id", id.to_string())).into_iter().collect();
        let data: DashboardData = self.client.get("/dashboard", &query).await?;
        checked(data)
    }
}
