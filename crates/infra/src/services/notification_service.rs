//! Notification inbox client
//!
//! Read-state changes are server-authoritative: callers refetch (or apply the
//! returned [`Notification`]) rather than flipping `is_read` locally.

use std::sync::Arc;

use chronodesk_domain::{Notification, UnreadCount};
use serde::de::IgnoredAny;
use tracing::instrument;

use super::checked;
use crate::api::{ApiClient, ApiError};

/// Client for `/notifications`
#[derive(Debug, Clone)]
pub struct NotificationService {
    client: Arc<ApiClient>,
}

impl NotificationService {
    /// Create the client over the shared [`ApiClient`]
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List the caller's notifications, newest first
    ///
    /// `unread=1` is sent only when `unread_only` is set.
    #[instrument(skip(self))]
    pub async fn list(&self, unread_only: bool) -> Result<Vec<Notification>, ApiError> {
        let query: Vec<(&str, String)> =
            if unread_only { vec![("unread", "1".to_string())] } else { Vec::new() };
        let items: Vec<Notification> = self.client.get("/notifications", &query).await?;
        checked(items)
    }

    /// Badge count for the inbox
    pub async fn unread_count(&self) -> Result<u32, ApiError> {
        let count: UnreadCount = self.client.get("/notifications/unread-count", &[]).await?;
        Ok(count.count)
    }

    /// Mark one notification read; returns the server's copy
    #[instrument(skip(self))]
    pub async fn mark_as_read(&self, id: i64) -> Result<Notification, ApiError> {
        let updated: Notification =
            self.client.patch::<(), _>(&format!("/notifications/{id}/read"), None).await?;
        checked(updated)
    }

    /// Mark every notification of the caller read
    #[instrument(skip(self))]
    pub async fn mark_all_as_read(&self) -> Result<(), ApiError> {
        self.client.post_empty::<IgnoredAny>("/notifications/read-all").await.map(|_| ())
    }

    /// Remove one notification
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete::<IgnoredAny>(&format!("/notifications/{id}")).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::services::test_support::client;

    fn notification(id: i64, read: bool) -> serde_json::Value {
        json!({
            "id": id,
            "user_id": 1,
            "type": "time_entry_approved",
            "title": "Entry approved",
            "message": "Your entry for Monday was approved",
            "data": { "time_entry_id": 55 },
            "is_read": read,
            "read_at": if read { json!("2024-05-06T10:00:00Z") } else { json!(null) },
            "created_at": "2024-05-06T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn list_all_omits_unread_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .and(query_param_is_missing("unread"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [notification(1, true), notification(2, false)] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let items = NotificationService::new(client(&server)).list(false).await.unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].notification_type, "time_entry_approved");
    }

    #[tokio::test]
    async fn list_unread_sends_flag() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .and(query_param("unread", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [notification(2, false)] })))
            .expect(1)
            .mount(&server)
            .await;

        let items = NotificationService::new(client(&server)).list(true).await.unwrap();
        assert!(!items[0].is_read);
    }

    #[tokio::test]
    async fn read_flag_without_timestamp_is_rejected() {
        let server = MockServer::start().await;
        let mut broken = notification(5, false);
        broken["is_read"] = json!(true);
        Mock::given(method("GET"))
            .and(path("/notifications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [broken] })))
            .mount(&server)
            .await;

        let err = NotificationService::new(client(&server)).list(false).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn unread_count_unwraps_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notifications/unread-count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "count": 4 } })))
            .mount(&server)
            .await;

        assert_eq!(NotificationService::new(client(&server)).unread_count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn mark_as_read_patches_without_body() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/notifications/2/read"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": notification(2, true) })))
            .expect(1)
            .mount(&server)
            .await;

        let updated = NotificationService::new(client(&server)).mark_as_read(2).await.unwrap();
        assert!(updated.is_read);
        assert!(updated.read_at.is_some());

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn mark_all_and_delete() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/notifications/read-all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": null, "message": "ok" })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/notifications/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let service = NotificationService::new(client(&server));
        service.mark_all_as_read().await.unwrap();
        service.delete(3).await.unwrap();
    }
}
