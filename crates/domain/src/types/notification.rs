//! In-app notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Validate;
use crate::errors::{ChronoDeskError, Result};

/// A notification addressed to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub message: String,
    /// Free-form payload, e.g. the id of the entry awaiting approval
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// `read_at` is set exactly when `is_read` is true.
    pub fn is_consistent(&self) -> bool {
        self.read_at.is_some() == self.is_read
    }
}

impl Validate for Notification {
    fn validate(&self) -> Result<()> {
        if !self.is_consistent() {
            return Err(ChronoDeskError::InvalidInput(format!(
                "notification {} has is_read={} but read_at is {}",
                self.id,
                self.is_read,
                if self.read_at.is_some() { "set" } else { "missing" }
            )));
        }
        Ok(())
    }
}

/// Payload of `GET /notifications/unread-count`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u32,
}
