//! Time entry client
//!
//! Covers the clock-in/clock-out flow as well as manual entry management.

use std::sync::Arc;

use chronodesk_domain::{ClockInRequest, TimeEntry, TimeEntryFilter, TimeEntryInput};
use serde::de::IgnoredAny;
use tracing::{info, instrument};

use super::{checked, ensure_valid};
use crate::api::{ApiClient, ApiError};

/// Client for `/time-entries`
#[derive(Debug, Clone)]
pub struct TimeEntryService {
    client: Arc<ApiClient>,
}

impl TimeEntryService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Entries matching `filter`; unset fields are not sent
    #[instrument(skip(self))]
    pub async fn list(&self, filter: &TimeEntryFilter) -> Result<Vec<TimeEntry>, ApiError> {
        let entries: Vec<TimeEntry> = self.client.get("/time-entries", &filter.to_query()).await?;
        checked(entries)
    }

    /// Open a running entry for the signed-in user
    #[instrument(skip_all)]
    pub async fn clock_in(&self, request: &ClockInRequest) -> Result<TimeEntry, ApiError> {
        let entry: TimeEntry = checked(self.client.post("/time-entries/clock-in", request).await?)?;
        info!(entry_id = entry.id, "clocked in");
        Ok(entry)
    }

    /// Close a running entry
    #[instrument(skip(self))]
    pub async fn clock_out(&self, id: i64) -> Result<TimeEntry, ApiError> {
        let entry: TimeEntry =
            checked(self.client.post_empty(&format!("/time-entries/{id}/clock-out")).await?)?;
        info!(entry_id = entry.id, hours = entry.worked_hours(), "clocked out");
        Ok(entry)
    }

    /// Record a manual entry
    pub async fn create(&self, input: &TimeEntryInput) -> Result<TimeEntry, ApiError> {
        ensure_valid(input)?;
        checked(self.client.post("/time-entries", input).await?)
    }

    /// Replace a manual entry
    pub async fn update(&self, id: i64, input: &TimeEntryInput) -> Result<TimeEntry, ApiError> {
        ensure_valid(input)?;
        checked(self.client.put(&format!("/time-entries/{id}"), input).await?)
    }

    /// Delete an entry
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<IgnoredAny>(&format!("/time-entries/{id}")).await.map(|_| ())
    }
}
