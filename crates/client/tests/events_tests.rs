//! Event listing tests.
//!
//! Covers:
//! - Verbatim parsing of both backend entity variants in one list.
//! - Fetch failure semantics: the prior snapshot stays visible, the session
//!   stays logged in, and the error is recorded for display.
//! - Bearer header attachment from a persisted token.

mod common;

use common::*;
use fleet_client::models::User;
use secrecy::SecretString;
use serde_json::json;

#[tokio::test]
async fn test_fetch_parses_mixed_entity_variants() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"_id": "686e5a21", "robot": "blackknight", "status": "active",
             "description": "None Shall Pass.",
             "createdAt": "2025-07-09T10:29:05Z"},
            {"id": 7, "name": "conveyor-3", "status": "maintenance",
             "description": "belt replaced",
             "timeCreated": "2025-07-10T08:00:00Z",
             "lastModified": "2025-07-11T09:30:00Z"}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let events = client.fetch_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id.as_deref(), Some("686e5a21"));
    assert_eq!(events[0].name, "blackknight");
    assert_eq!(events[1].id.as_deref(), Some("7"));
    assert_eq!(events[1].name, "conveyor-3");
    assert_eq!(events[1].last_modified.as_deref(), Some("2025-07-11T09:30:00Z"));
}

#[tokio::test]
async fn test_fetch_empty_collection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    assert!(client.fetch_events().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_fetch_error_reports_status_code() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.fetch_events().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("status: 503"));
}

#[tokio::test]
async fn test_fetch_failure_keeps_snapshot_and_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let mut session = SessionStore::new();
    session.complete_login(Ok(User {
        username: "admin".to_string(),
        id: Some("1".to_string()),
    }));

    let mut store = EventStore::new();
    let seeded = store.begin_fetch();
    store.complete_fetch(
        seeded,
        Ok(vec![Event {
            id: None,
            name: "patsy".to_string(),
            status: Some("active".to_string()),
            description: None,
            created_at: None,
            last_modified: None,
        }]),
    );

    let client = client_for(&mock_server);
    let ticket = store.begin_fetch();
    let applied = store.complete_fetch(ticket, client.fetch_events().await);

    assert!(applied);
    assert!(session.is_logged_in());
    assert_eq!(store.events().len(), 1);
    assert_eq!(store.events()[0].name, "patsy");
    assert!(store.last_error().unwrap().contains("status: 500"));
}

#[tokio::test]
async fn test_persisted_token_rides_fetch_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/events"))
        .and(header("Authorization", "Bearer persisted-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = FleetClient::builder()
        .base_url(mock_server.uri())
        .bearer_token(Some(SecretString::new("persisted-tok".to_string().into())))
        .build()
        .unwrap();

    client.fetch_events().await.unwrap();
}
