//! Calendar feed client.

use std::sync::Arc;

use chronodesk_domain::{CalendarEvent, CalendarQuery};
use tracing::instrument;

use super::checked;
use crate::api::{ApiClient, ApiError};

/// Client for `GET /calendar/events`
#[derive(Debug, Clone)]
pub struct CalendarService {
    client: Arc<ApiClient>,
}

impl CalendarService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Events overlapping the query window
    ///
    /// A feed containing an event whose `end` precedes its `start` is
    /// rejected as [`ApiError::Decode`].
    #[instrument(skip_all, fields(start = %query.start, end = %query.end))]
    pub async fn list_events(&self, query: &CalendarQuery) -> Result<Vec<CalendarEvent>, ApiError> {
        let events: Vec<CalendarEvent> = self.client.get("/calendar/events", &query.to_query()).await?;
        checked(events)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use chronodesk_domain::CalendarEventType;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::test_support::client;

    fn window() -> CalendarQuery {
        CalendarQuery::between(
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap(),
        )
    }

    #[tokio::test]
    async fn sends_window_user_and_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/events"))
            .and(query_param("start", "2024-05-01T00:00:00+00:00"))
            .and(query_param("end", "2024-05-31T23:59:59+00:00"))
            .and(query_param("user_id", "4"))
            .and(query_param("types", "holiday,absence"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": "holiday-1", "title": "Labour Day", "type": "holiday",
                    "start": "2024-05-01T00:00:00Z", "end": "2024-05-01T23:59:59Z"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = window()
            .for_user(4)
            .with_types([CalendarEventType::Holiday, CalendarEventType::Absence]);
        let events = CalendarService::new(client(&server)).list_events(&query).await.unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, CalendarEventType::Holiday);
    }

    #[tokio::test]
    async fn rejects_feed_with_inverted_event() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendar/events"))
            .and(query_param_is_missing("types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "id": "te-1", "title": "Shift", "type": "time_entry",
                      "start": "2024-05-02T09:00:00Z", "end": "2024-05-02T17:00:00Z" },
                    { "id": "te-2", "title": "Broken", "type": "time_entry",
                      "start": "2024-05-03T17:00:00Z", "end": "2024-05-03T09:00:00Z" }
                ]
            })))
            .mount(&server)
            .await;

        let err = CalendarService::new(client(&server)).list_events(&window()).await.unwrap_err();
        match err {
            ApiError::Decode(message) => assert!(message.contains("te-2")),
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
