//! Roles and permissions

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{ChronoDeskError, Result};

/// A single grantable permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub id: i64,
    pub name: String,
    pub slug: String,
    /// Grouping used by the permission matrix, e.g. `time_entries`
    #[serde(default)]
    pub group: Option<String>,
}

/// A role with its permission set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// `None` for system roles shared by every company
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub is_system: bool,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Validate for Role {
    /// System roles are never scoped to a company.
    fn validate(&self) -> Result<()> {
        if self.is_system && self.company_id.is_some() {
            return Err(ChronoDeskError::InvalidInput(format!(
                "system role '{}' must not be company-scoped",
                self.slug
            )));
        }
        Ok(())
    }
}

impl Role {
    pub fn has_permission(&self, slug: &str) -> bool {
        self.permissions.iter().any(|p| p.slug == slug)
    }
}

/// Body of `POST /roles` and `PUT /roles/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permission_ids: Vec<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(is_system: bool, company_id: Option<i64>) -> Role {
        Role {
            id: 1,
            name: "Supervisor".into(),
            slug: "supervisor".into(),
            description: None,
            company_id,
            is_system,
            permissions: vec![Permission {
                id: 10,
                name: "Approve entries".into(),
                slug: "time_entries.approve".into(),
                group: Some("time_entries".into()),
            }],
        }
    }

    #[test]
    fn system_roles_cannot_be_company_scoped() {
        assert!(role(true, None).validate().is_ok());
        assert!(role(false, Some(3)).validate().is_ok());
        assert!(role(true, Some(3)).validate().is_err());
    }

    #[test]
    fn permission_lookup_by_slug() {
        let role = role(false, Some(3));
        assert!(role.has_permission("time_entries.approve"));
        assert!(!role.has_permission("users.delete"));
    }
}
