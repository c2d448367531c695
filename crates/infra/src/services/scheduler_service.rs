//! Reminder scheduler client.

use std::sync::Arc;

use chronodesk_domain::{ReminderLog, ScheduledTask, TaskStatus};
use serde::de::IgnoredAny;
use serde::Serialize;
use tracing::{info, instrument};

use crate::api::{ApiClient, ApiError};

#[derive(Serialize)]
struct StatusChange {
    status: TaskStatus,
}

/// Client for `/scheduler`
#[derive(Debug, Clone)]
pub struct SchedulerService {
    client: Arc<ApiClient>,
}

impl SchedulerService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// All scheduled reminder tasks
    pub async fn list_tasks(&self) -> Result<Vec<ScheduledTask>, ApiError> {
        self.client.get("/scheduler/tasks", &[]).await
    }

    /// Trigger a task immediately, outside its schedule
    #[instrument(skip(self))]
    pub async fn run_task(&self, id: i64) -> Result<(), ApiError> {
        self.client.post_empty::<IgnoredAny>(&format!("/scheduler/tasks/{id}/run")).await?;
        info!(task_id = id, "scheduled task triggered");
        Ok(())
    }

    /// Pause or resume a task
    #[instrument(skip(self))]
    pub async fn set_task_status(&self, id: i64, status: TaskStatus) -> Result<ScheduledTask, ApiError> {
        self.client.patch(&format!("/scheduler/tasks/{id}"), Some(&StatusChange { status })).await
    }

    /// Recent execution logs; the server applies its own default when `limit` is `None`
    pub async fn list_logs(&self, limit: Option<u32>) -> Result<Vec<ReminderLog>, ApiError> {
        let query: Vec<(&str, String)> =
            limit.map(|n| ("limit", n.to_string())).into_iter().collect();
        self.client.get("/scheduler/logs", &query).await
    }
}
