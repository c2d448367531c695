//! Shift templates

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{ChronoDeskError, Result};

/// Reusable shift definition assigned to employees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: i64,
    pub company_id: i64,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub break_minutes: u32,
    /// 0 = Sunday .. 6 = Saturday
    #[serde(default)]
    pub days_of_week: Vec<u8>,
    #[serde(default)]
    pub color: Option<String>,
}

impl ShiftTemplate {
    /// Shifts ending at or before their start wrap past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_time <= self.start_time
    }

    /// Paid minutes, net of the break
    pub fn net_minutes(&self) -> i64 {
        let mut span = (self.end_time - self.start_time).num_minutes();
        if span <= 0 {
            span += 24 * 60;
        }
        (span - i64::from(self.break_minutes)).max(0)
    }
}

/// Body of `POST /shift-templates` and `PUT /shift-templates/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplateInput {
    pub company_id: i64,
    pub name: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub break_minutes: u32,
    pub days_of_week: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Validate for ShiftTemplate {
    fn validate(&self) -> Result<()> {
        check_days(&self.days_of_week)
    }
}

impl Validate for ShiftTemplateInput {
    fn validate(&self) -> Result<()> {
        check_days(&self.days_of_week)
    }
}

/// Days run 0 (Sunday) to 6 (Saturday).
fn check_days(days: &[u8]) -> Result<()> {
    if let Some(day) = days.iter().find(|day| **day > 6) {
        return Err(ChronoDeskError::InvalidInput(format!("invalid day of week {day}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(start: &str, end: &str, break_minutes: u32) -> ShiftTemplate {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "company_id": 1,
            "name": "Night",
            "start_time": start,
            "end_time": end,
            "break_minutes": break_minutes,
            "days_of_week": [1, 2, 3, 4, 5]
        }))
        .unwrap()
    }

    #[test]
    fn overnight_shift_minutes() {
        let night = template("22:00:00", "06:00:00", 30);
        assert!(night.crosses_midnight());
        assert_eq!(night.net_minutes(), 450);

        let day = template("09:00:00", "17:00:00", 60);
        assert!(!day.crosses_midnight());
        assert_eq!(day.net_minutes(), 420);
    }

    #[test]
    fn days_of_week_out_of_range() {
        let input = ShiftTemplateInput {
            company_id: 1,
            name: "Weekend".into(),
            start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            break_minutes: 0,
            days_of_week: vec![0, 7],
            color: None,
        };
        assert!(input.validate().is_err());
    }
}
