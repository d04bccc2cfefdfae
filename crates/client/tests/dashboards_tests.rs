//! Dashboard import tests.
//!
//! # Invariants
//! - The envelope is `{dashboard, overwrite: true}` with `dashboard.id` null
//! - Every other dashboard field reaches Grafana untouched
//! - A success response without `url` (or without a body) is still a success
//!
//! # What this does NOT handle
//! - File discovery and ordering (see provision_tests.rs)

mod common;

use common::*;
use grafana_client::{load_dashboard, prepare_import};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};

#[tokio::test]
async fn test_import_dashboard_sends_cleared_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .and(header("authorization", ADMIN_BASIC_HEADER))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/import_ok.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let original = load_fixture("dashboards/node_exporter.json");
    let file = write_dashboard(dir.path(), "node.json", &original);

    let request = prepare_import(&file, load_dashboard(&file).unwrap()).unwrap();
    let client = client_for(&mock_server.uri());
    let response = client.import_dashboard(&request).await.unwrap();

    assert_eq!(response.uid.as_deref(), Some("rYdddlPWk"));
    assert_eq!(
        response.browse_url(client.base_url()).as_deref(),
        Some(format!("{}/d/rYdddlPWk/node-exporter", mock_server.uri()).as_str())
    );

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["overwrite"], true);
    assert_eq!(body["dashboard"]["id"], serde_json::Value::Null);
    assert_eq!(body["dashboard"]["uid"], original["uid"]);
    assert_eq!(body["dashboard"]["title"], original["title"]);
    assert_eq!(body["dashboard"]["panels"], original["panels"]);
}

#[tokio::test]
async fn test_import_dashboard_missing_url_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("dashboards/import_no_url.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let request = prepare_import(
        std::path::Path::new("x.json"),
        serde_json::json!({"title": "X"}),
    )
    .unwrap();
    let response = client.import_dashboard(&request).await.unwrap();

    assert!(response.url.is_none());
    assert!(response.browse_url(client.base_url()).is_none());
    assert_eq!(response.version, Some(3));
}

#[tokio::test]
async fn test_import_dashboard_non_json_body_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let request = prepare_import(
        std::path::Path::new("x.json"),
        serde_json::json!({"title": "X"}),
    )
    .unwrap();

    let response = client.import_dashboard(&request).await.unwrap();
    assert!(response.uid.is_none());
}

#[tokio::test]
async fn test_import_dashboard_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/dashboards/db"))
        .respond_with(
            ResponseTemplate::new(412)
                .set_body_json(load_fixture("dashboards/precondition_failed.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let request = prepare_import(
        std::path::Path::new("x.json"),
        serde_json::json!({"title": "X"}),
    )
    .unwrap();

    match client.import_dashboard(&request).await.unwrap_err() {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 412);
            assert!(message.contains("same name"));
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}
