//! Dashboard aggregates

use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{ChronoDeskError, Result};

/// Headline counters shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardStats {
    pub total_employees: u32,
    pub active_employees: u32,
    pub clocked_in_now: u32,
    pub pending_approvals: u32,
    pub hours_today: f64,
    pub hours_this_week: f64,
    pub overtime_hours: f64,
}

/// One point of the worked-hours series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Bucket label as sent by the server (usually `YYYY-MM-DD`)
    pub date: String,
    pub hours: f64,
}

/// Hours aggregated per employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeAggregate {
    pub user_id: i64,
    pub name: String,
    pub hours: f64,
    #[serde(default)]
    pub entries: u32,
}

/// Share of entries in one status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub status: String,
    pub count: u32,
}

/// Payload of `GET /dashboard`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub hours_series: Vec<TimeSeriesPoint>,
    pub employee_hours: Vec<EmployeeAggregate>,
    pub status_distribution: Vec<StatusSlice>,
}

impl Validate for DashboardData {
    /// Counts are unsigned by type; hours must be finite and non-negative.
    fn validate(&self) -> Result<()> {
        let stats = &self.stats;
        let hours = [
            ("hours_today", stats.hours_today),
            ("hours_this_week", stats.hours_this_week),
            ("overtime_hours", stats.overtime_hours),
        ];
        for (field, value) in hours {
            check_hours(field, value)?;
        }
        for point in &self.hours_series {
            check_hours(&format!("hours_series[{}]", point.date), point.hours)?;
        }
        for employee in &self.employee_hours {
            check_hours(&format!("employee_hours[{}]", employee.user_id), employee.hours)?;
        }
        Ok(())
    }
}

impl DashboardData {
    /// Total entries across all statuses
    pub fn total_status_count(&self) -> u64 {
        self.status_distribution.iter().map(|slice| u64::from(slice.count)).sum()
    }
}

fn check_hours(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ChronoDeskError::InvalidInput(format!("{field} must be a non-negative number, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_payload() {
        let data: DashboardData = serde_json::from_str(
            r#"{
                "stats": { "total_employees": 12, "hours_today": 31.5 },
                "status_distribution": [
                    { "status": "approved", "count": 8 },
                    { "status": "pending", "count": 3 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(data.stats.total_employees, 12);
        assert_eq!(data.stats.clocked_in_now, 0);
        assert!(data.hours_series.is_empty());
        assert_eq!(data.total_status_count(), 11);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn rejects_negative_hours() {
        let mut data = DashboardData::default();
        data.employee_hours.push(EmployeeAggregate {
            user_id: 4,
            name: "Bo".into(),
            hours: -1.0,
            entries: 1,
        });

        let err = data.validate().unwrap_err();
        assert!(err.to_string().contains("employee_hours[4]"));
    }

    #[test]
    fn negative_counts_fail_to_deserialize() {
        let result: std::result::Result<DashboardStats, _> =
            serde_json::from_str(r#"{ "total_employees": -2 }"#);
        assert!(result.is_err());
    }
}
