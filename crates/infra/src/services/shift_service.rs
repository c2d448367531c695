//! Shift template client.

use std::sync::Arc;

use chronodesk_domain::{ShiftTemplate, ShiftTemplateInput};
use serde::de::IgnoredAny;
use tracing::instrument;

use super::{checked, ensure_valid};
use crate::api::{ApiClient, ApiError};

/// Client for `/shift-templates`
#[derive(Debug, Clone)]
pub struct ShiftService {
    client: Arc<ApiClient>,
}

impl ShiftService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Templates, optionally scoped to one company
    pub async fn list_templates(&self, company_id: Option<i64>) -> Result<Vec<ShiftTemplate>, ApiError> {
        let query: Vec<(&str, String)> =
            company_id.map(|id| ("company_id", id.to_string())).into_iter().collect();
        let templates: Vec<ShiftTemplate> = self.client.get("/shift-templates", &query).await?;
        checked(templates)
    }

    /// One template by id
    pub async fn get_template(&self, id: i64) -> Result<ShiftTemplate, ApiError> {
        checked(self.client.get(&format!("/shift-templates/{id}"), &[]).await?)
    }

    /// Create a template; days outside 0..=6 are refused before sending
    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_template(&self, input: &ShiftTemplateInput) -> Result<ShiftTemplate, ApiError> {
        ensure_valid(input)?;
        checked(self.client.post("/shift-templates", input).await?)
    }

    /// Replace a template; days outside 0..=6 are refused before sending
    #[instrument(skip(self, input))]
    pub async fn update_template(
        &self,
        id: i64,
        input: &ShiftTemplateInput,
    ) -> Result<ShiftTemplate, ApiError> {
        ensure_valid(input)?;
        checked(self.client.put(&format!("/shift-templates/{id}"), input).await?)
    }

    /// Delete a template
    #[instrument(skip(self))]
    pub async fn delete_template(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<IgnoredAny>(&format!("/shift-templates/{id}")).await.map(|_| ())
    }
}
