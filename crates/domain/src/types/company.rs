//! Per-company configurable settings

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload of `GET /companies/{id}/settings`
///
/// Fields the client does not model are kept in `extra` so a read-modify-write
/// cycle does not drop them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySettings {
    pub company_id: i64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub week_starts_on: Option<u8>,
    #[serde(default)]
    pub daily_hours_target: Option<f64>,
    #[serde(default)]
    pub overtime_threshold_hours: Option<f64>,
    #[serde(default)]
    pub clock_in_grace_minutes: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial update for `PUT /companies/{id}/settings`; `None` fields are not sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompanySettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_starts_on: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_hours_target: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overtime_threshold_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock_in_grace_minutes: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompanySettingsUpdate {
    /// Update touching only the timezone
    pub fn timezone(timezone: impl Into<String>) -> Self {
        Self { timezone: Some(timezone.into()), ..Self::default() }
    }

    /// Whether the update would send an empty object
    pub fn is_empty(&self) -> bool {
        self.timezone.is_none()
            && self.locale.is_none()
            && self.week_starts_on.is_none()
            && self.daily_hours_target.is_none()
            && self.overtime_threshold_hours.is_none()
            && self.clock_in_grace_minutes.is_none()
            && self.extra.is_empty()
    }
}
