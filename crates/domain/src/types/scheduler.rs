//! Scheduled reminder tasks and their execution log

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Active,
    Paused,
    Error,
}

/// Outcome of one reminder run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderStatus {
    Success,
    Failed,
}

/// A server-side recurring job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: i64,
    pub name: String,
    /// Frequency tag, e.g. `daily`, `hourly`, `weekly`
    pub frequency: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub last_run_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub next_run_at: Option<DateTime<Utc>>,
}

/// One execution record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderLog {
    pub id: i64,
    pub task_name: String,
    pub status: ReminderStatus,
    pub executed_at: DateTime<Utc>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recipients: u32,
}
