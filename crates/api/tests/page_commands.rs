//! Integration tests for pages and commands against a mock backend
//!
//! These drive the same entry points the CLI uses, end to end through the
//! token store, API client and resource clients.

mod support;

use chrono::{TimeZone, Utc};
use chronodesk_domain::{CalendarQuery, ChronoDeskError, CompanySettingsUpdate, TimeEntryFilter};
use chronodesk_infra::api::{ApiErrorCategory, TokenStore};
use chronodesk_lib::{
    calendar_page, commands, company_settings_page, dashboard_page, notifications_page,
    time_entries_page, PageOutcome, SessionState, ViewState,
};
use serde_json::json;
use support::{setup_test_app, TEST_TOKEN};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn dashboard_body() -> serde_json::Value {
    json!({ "data": { "stats": { "total_employees": 5, "hours_today": 12.0 } } })
}

#[tokio::test]
async fn pages_redirect_without_session_and_send_nothing() {
    let app = setup_test_app(false).await;
    let session = app.ctx.session().await;
    assert!(!session.is_authenticated());

    let window = CalendarQuery::between(
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 5, 7, 0, 0, 0).unwrap(),
    );

    assert_eq!(dashboard_page(&app.ctx, None).mount(&session).await, PageOutcome::RedirectToLogin);
    assert_eq!(company_settings_page(&app.ctx, 1).mount(&session).await, PageOutcome::RedirectToLogin);
    assert_eq!(notifications_page(&app.ctx, false).mount(&session).await, PageOutcome::RedirectToLogin);
    assert_eq!(calendar_page(&app.ctx, window).mount(&session).await, PageOutcome::RedirectToLogin);
    assert_eq!(
        time_entries_page(&app.ctx, TimeEntryFilter::default()).mount(&session).await,
        PageOutcome::RedirectToLogin
    );

    assert_eq!(app.request_count().await, 0);
}

#[tokio::test]
async fn dashboard_page_failure_then_retry() {
    let app = setup_test_app(true).await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
        .up_to_n_times(1)
        .mount(&app.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dashboard_body()))
        .mount(&app.server)
        .await;

    let mut page = dashboard_page(&app.ctx, None);

    assert_eq!(page.mount(&SessionState::authenticated()).await, PageOutcome::Rendered);
    assert_eq!(
        page.state(),
        &ViewState::Failed { message: "boom".to_string(), category: ApiErrorCategory::Server }
    );

    assert_eq!(page.retry().await, PageOutcome::Rendered);
    let data = page.state().data().expect("dashboard should be loaded after retry");
    assert_eq!(data.stats.total_employees, 5);
    assert_eq!(app.request_count().await, 2);
}

#[tokio::test]
async fn expired_session_redirects_from_page() {
    let app = setup_test_app(true).await;
    Mock::given(method("GET"))
        .and(path("/notifications"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "message": "Unauthenticated." })))
        .mount(&app.server)
        .await;

    let mut page = notifications_page(&app.ctx, true);
    let outcome = page.mount(&app.ctx.session().await).await;

    assert_eq!(outcome, PageOutcome::RedirectToLogin);
    assert_eq!(page.state().error(), Some("Unauthenticated."));
}

#[tokio::test]
async fn login_then_settings_then_logout() {
    let app = setup_test_app(false).await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "token": TEST_TOKEN,
                "user": { "id": 1, "company_id": 42, "name": "Ana", "email": "ana@example.com", "role": "admin" }
            }
        })))
        .mount(&app.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/companies/42/settings"))
        .and(header("Authorization", format!("Bearer {TEST_TOKEN}").as_str()))
        .and(body_json(json!({ "timezone": "UTC" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "company_id": 42, "timezone": "UTC" } })),
        )
        .expect(1)
        .mount(&app.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/logout"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&app.server)
        .await;

    let user = commands::login(&app.ctx, "ana@example.com", "secret").await.unwrap();
    assert_eq!(app.tokens.token().await.unwrap().as_deref(), Some(TEST_TOKEN));

    let settings = commands::update_company_settings(
        &app.ctx,
        user.company_id,
        &CompanySettingsUpdate::timezone("UTC"),
    )
    .await
    .unwrap();
    assert_eq!(settings.timezone.as_deref(), Some("UTC"));

    commands::logout(&app.ctx).await.unwrap();
    assert!(!app.ctx.session().await.is_authenticated());

    let err = commands::get_dashboard(&app.ctx, None).await.unwrap_err();
    assert!(matches!(err, ChronoDeskError::Auth(_)));
}

#[tokio::test]
async fn command_errors_keep_server_message() {
    let app = setup_test_app(true).await;
    Mock::given(method("GET"))
        .and(path("/dashboard"))
        .and(query_param("company_id", "9"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "message": "Forbidden company" })))
        .mount(&app.server)
        .await;

    let body = json!({
        "message": "The timezone is invalid.",
        "errors": { "timezone": ["The timezone is invalid."] }
    });
    Mock::given(method("PUT"))
        .and(path("/companies/9/settings"))
        .respond_with(ResponseTemplate::new(422).set_body_json(body.clone()))
        .mount(&app.server)
        .await;

    let err = commands::get_dashboard(&app.ctx, Some(9)).await.unwrap_err();
    assert_eq!(err, ChronoDeskError::Auth("Forbidden company".to_string()));

    let err = commands::update_company_settings(&app.ctx, 9, &CompanySettingsUpdate::timezone("Mars/Base"))
        .await
        .unwrap_err();
    match err {
        ChronoDeskError::Api { status, message, body: raw } => {
            assert_eq!(status, 422);
            assert_eq!(message, "The timezone is invalid.");
            assert_eq!(serde_json::from_str::<serde_json::Value>(&raw).unwrap(), body);
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn calendar_command_sorts_and_validates_window() {
    let app = setup_test_app(true).await;
    Mock::given(method("GET"))
        .and(path("/calendar/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                { "id": "b", "title": "Later", "type": "shift",
                  "start": "2024-05-03T09:00:00Z", "end": "2024-05-03T17:00:00Z" },
                { "id": "a", "title": "Earlier", "type": "holiday",
                  "start": "2024-05-01T00:00:00Z", "end": "2024-05-01T23:59:59Z" }
            ]
        })))
        .expect(1)
        .mount(&app.server)
        .await;

    let start = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 5, 31, 0, 0, 0).unwrap();

    let events = commands::list_calendar_events(&app.ctx, &CalendarQuery::between(start, end))
        .await
        .unwrap();
    assert_eq!(events.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), vec!["a", "b"]);

    let inverted = commands::list_calendar_events(&app.ctx, &CalendarQuery::between(end, start)).await;
    assert!(matches!(inverted, Err(ChronoDeskError::InvalidInput(_))));
}
