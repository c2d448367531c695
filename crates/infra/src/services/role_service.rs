//! Roles and permissions client.

use std::sync::Arc;

use chronodesk_domain::{Permission, Role, RoleInput};
use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::{debug, instrument};

use super::checked;
use crate::api::{ApiClient, ApiError};

#[derive(Serialize)]
struct PermissionSync<'a> {
    permission_ids: &'a [i64],
}

/// Client for `/roles` and `/permissions`
#[derive(Debug, Clone)]
pub struct RoleService {
    client: Arc<ApiClient>,
}

impl RoleService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All roles visible to the caller, with their permissions
    pub async fn list_roles(&self) -> Result<Vec<Role>, ApiError> {
        let roles: Vec<Role> = self.client.get("/roles", &[]).await?;
        checked(roles)
    }

    /// One role by id
    pub async fn get_role(&self, id: i64) -> Result<Role, ApiError> {
        let role: Role = self.client.get(&format!("/roles/{id}"), &[]).await?;
        checked(role)
    }

    /// Create a company role
    #[instrument(skip_all, fields(name = %input.name))]
    pub async fn create_role(&self, input: &RoleInput) -> Result<Role, ApiError> {
        let role: Role = self.client.post("/roles", input).await?;
        checked(role)
    }

    /// Rename or redescribe a role
    #[instrument(skip(self, input))]
    pub async fn update_role(&self, id: i64, input: &RoleInput) -> Result<Role, ApiError> {
        let role: Role = self.client.put(&format!("/roles/{id}"), input).await?;
        checked(role)
    }

    /// Delete a role; system roles are refused by the server
    #[instrument(skip(self))]
    pub async fn delete_role(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<IgnoredAny>(&format!("/roles/{id}")).await.map(|_| ())
    }

    /// Catalogue of grantable permissions
    pub async fn list_permissions(&self) -> Result<Vec<Permission>, ApiError> {
        self.client.get("/permissions", &[]).await
    }

    /// Replace the permission set of a role
    ///
    /// The server treats `permission_ids` as the complete set; omitted ids
    /// are revoked.
    #[instrument(skip(self, permission_ids))]
    pub async fn sync_permissions(&self, role_id: i64, permission_ids: &[i64]) -> Result<Role, ApiError> {
        debug!(role_id, count = permission_ids.len(), "syncing role permissions");
        let role: Role = self
            .client
            .put(&format!("/roles/{role_id}/permissions"), &PermissionSync { permission_ids })
            .await?;
        checked(role)
    }
}
