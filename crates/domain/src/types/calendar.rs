//! Calendar events

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::Validate;
use crate::errors::{ChronoDeskError, Result};

/// Kinds of events the calendar renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarEventType {
    TimeEntry,
    Holiday,
    Absence,
    Shift,
}

impl CalendarEventType {
    /// Wire name, as used in query strings
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimeEntry => "time_entry",
            Self::Holiday => "holiday",
            Self::Absence => "absence",
            Self::Shift => "shift",
        }
    }
}

/// One event on the calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: CalendarEventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl Validate for CalendarEvent {
    /// `end` must not precede `start`.
    fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(ChronoDeskError::InvalidInput(format!(
                "calendar event {} ends before it starts",
                self.id
            )));
        }
        Ok(())
    }
}

impl CalendarEvent {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Filter for `GET /calendar/events`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub user_id: Option<i64>,
    /// Empty means every type
    pub types: Vec<CalendarEventType>,
}

impl CalendarQuery {
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end, user_id: None, types: Vec::new() }
    }

    pub fn for_user(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_types(mut self, types: impl IntoIterator<Item = CalendarEventType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Query string pairs in a stable order
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("start", self.start.to_rfc3339()), ("end", self.end.to_rfc3339())];
        if let Some(user_id) = self.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if !self.types.is_empty() {
            let types: Vec<&str> = self.types.iter().map(|t| t.as_str()).collect();
            query.push(("types", types.join(",")));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 4, hour, 0, 0).unwrap()
    }

    #[test]
    fn parses_type_field() {
        let event: CalendarEvent = serde_json::from_str(
            r#"{"id":"h-1","title":"Carnival","start":"2024-03-04T00:00:00Z",
                "end":"2024-03-05T00:00:00Z","type":"holiday"}"#,
        )
        .unwrap();

        assert_eq!(event.event_type, CalendarEventType::Holiday);
        assert_eq!(event.duration(), Duration::hours(24));
        assert!(event.validate().is_ok());
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: std::result::Result<CalendarEvent, _> = serde_json::from_str(
            r#"{"id":"x","title":"?","start":"2024-03-04T00:00:00Z",
                "end":"2024-03-04T01:00:00Z","type":"meeting"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn end_before_start_is_invalid() {
        let event = CalendarEvent {
            id: "e1".into(),
            title: "Shift".into(),
            start: at(10),
            end: at(9),
            event_type: CalendarEventType::Shift,
            status: None,
            user_id: None,
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn query_includes_optional_filters() {
        let query = CalendarQuery::between(at(0), at(23))
            .for_user(9)
            .with_types([CalendarEventType::Absence, CalendarEventType::Holiday]);
        let pairs = query.to_query();

        assert_eq!(pairs[0], ("start", "2024-03-04T00:00:00+00:00".to_string()));
        assert_eq!(pairs[2], ("user_id", "9".to_string()));
        assert_eq!(pairs[3], ("types", "absence,holiday".to_string()));
    }
}
