//! Datasource registration tests.
//!
//! # Invariants
//! - The request body is the descriptor verbatim
//! - 2xx is `Created`, 409 is `AlreadyExists`, anything else is `ApiError`
//!
//! # What this does NOT handle
//! - How the workflow reacts to a failure (see provision_tests.rs)

mod common;

use common::*;
use grafana_client::{DatasourceDescriptor, DatasourceOutcome};
use grafana_config::DatasourceConfig;
use wiremock::matchers::{body_json, header, method, path};

fn descriptor() -> DatasourceDescriptor {
    DatasourceDescriptor::from(&DatasourceConfig::default())
}

#[tokio::test]
async fn test_create_datasource_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .and(header("authorization", ADMIN_BASIC_HEADER))
        .and(body_json(serde_json::json!({
            "name": "Prometheus",
            "type": "prometheus",
            "url": "http://sre-prometheus:9090",
            "access": "proxy",
            "isDefault": true
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("datasources/created.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = endpoints::create_datasource(
        &Client::new(),
        &mock_server.uri(),
        &admin_auth(),
        &descriptor(),
    )
    .await
    .unwrap();

    match outcome {
        DatasourceOutcome::Created(created) => {
            assert_eq!(created.id, Some(1));
            assert_eq!(created.message.as_deref(), Some("Datasource added"));
        }
        other => panic!("expected Created, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_datasource_conflict_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(load_fixture("datasources/conflict.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let outcome = client.create_datasource(&descriptor()).await.unwrap();

    assert!(matches!(outcome, DatasourceOutcome::AlreadyExists));
}

#[tokio::test]
async fn test_create_datasource_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"message": "Failed to add datasource"})),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client.create_datasource(&descriptor()).await.unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to add datasource");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_datasource_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client.create_datasource(&descriptor()).await.unwrap_err();

    assert_eq!(err.status(), Some(401));
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_create_datasource_with_api_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/datasources"))
        .and(header("authorization", "Bearer glsa_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GrafanaClient::builder()
        .base_url(mock_server.uri())
        .auth_strategy(AuthStrategy::ApiToken {
            token: secrecy::SecretString::new("glsa_test_token".to_string().into()),
        })
        .build()
        .unwrap();

    let outcome = client.create_datasource(&descriptor()).await.unwrap();
    assert!(matches!(outcome, DatasourceOutcome::Created(_)));
}
