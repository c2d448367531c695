//! Time entries (clock-in / clock-out records)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{ChronoDeskError, Result};

/// Approval state of a time entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TimeEntryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl TimeEntryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// A work period recorded by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: i64,
    pub user_id: i64,
    pub clock_in: DateTime<Utc>,
    /// `None` while the entry is still running
    #[serde(default)]
    pub clock_out: Option<DateTime<Utc>>,
    #[serde(default)]
    pub break_minutes: u32,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: TimeEntryStatus,
}

impl Validate for TimeEntry {
    fn validate(&self) -> Result<()> {
        match self.clock_out {
            Some(out) if out < self.clock_in => Err(ChronoDeskError::InvalidInput(format!(
                "time entry {} clocks out before it clocks in",
                self.id
            ))),
            _ => Ok(()),
        }
    }
}

impl TimeEntry {
    pub fn is_running(&self) -> bool {
        self.clock_out.is_none()
    }

    /// Worked hours net of breaks; zero while running
    pub fn worked_hours(&self) -> f64 {
        let Some(out) = self.clock_out else { return 0.0 };
        let minutes = (out - self.clock_in).num_minutes() - i64::from(self.break_minutes);
        minutes.max(0) as f64 / 60.0
    }
}

/// Body of `POST /time-entries` and `PUT /time-entries/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryInput {
    pub user_id: i64,
    pub clock_in: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<DateTime<Utc>>,
    pub break_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Validate for TimeEntryInput {
    fn validate(&self) -> Result<()> {
        match self.clock_out {
            Some(out) if out < self.clock_in => {
                Err(ChronoDeskError::InvalidInput("clock_out must not precede clock_in".to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Body of `POST /time-entries/clock-in`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClockInRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_template_id: Option<i64>,
}

/// Filter for `GET /time-entries`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeEntryFilter {
    pub user_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub status: Option<TimeEntryStatus>,
}

impl TimeEntryFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(user_id) = self.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(from) = self.from {
            query.push(("from", from.to_string()));
        }
        if let Some(to) = self.to {
            query.push(("to", to.to_string()));
        }
        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }
        query
    }
}
