//! User management client.

use std::sync::Arc;

use chronodesk_domain::{UserInput, UserPreferences, UserProfile, UserUpdate};
use serde::de::IgnoredAny;
use tracing::instrument;

use crate::api::{ApiClient, ApiError};

/// Client for `/users`
#[derive(Debug, Clone)]
pub struct UserService {
    client: Arc<ApiClient>,
}

impl UserService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List users, optionally filtered by company
    #[instrument(skip(self))]
    pub async fn list_users(&self, company_id: Option<i64>) -> Result<Vec<UserProfile>, ApiError> {
        let query: Vec<(&str, String)> =
            company_id.map(|id| ("company_id", id.to_string())).into_iter().collect();
        self.client.get("/users", &query).await
    }

    /// One user by id
    pub async fn get_user(&self, id: i64) -> Result<UserProfile, ApiError> {
        self.client.get(&format!("/users/{id}"), &[]).await
    }

    /// Create a user account
    #[instrument(skip_all, fields(email = %input.email))]
    pub async fn create_user(&self, input: &UserInput) -> Result<UserProfile, ApiError> {
        self.client.post("/users", input).await
    }

    /// Apply a partial profile update
    #[instrument(skip(self, update))]
    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<UserProfile, ApiError> {
        self.client.put(&format!("/users/{id}"), update).await
    }

    /// Delete a user account
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<IgnoredAny>(&format!("/users/{id}")).await.map(|_| ())
    }

    /// Replace the user's preferences
    pub async fn update_preferences(
        &self,
        id: i64,
        preferences: &UserPreferences,
    ) -> Result<UserPreferences, ApiError> {
        self.client.put(&format!("/users/{id}/preferences"), preferences).await
    }
}
