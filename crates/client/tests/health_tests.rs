//! Health probe and readiness wait tests.
//!
//! # Invariants
//! - Any 2xx from `/api/health` counts as ready
//! - Unreachable or failing probes are retried up to the attempt budget, then `NotReady`
//! - The health probe carries no credentials
//!
//! # What this does NOT handle
//! - Datasource or dashboard requests (see datasources_tests.rs, dashboards_tests.rs)

mod common;

use common::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_get_health_parses_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("health/ok.json")))
        .mount(&mock_server)
        .await;

    let health = endpoints::get_health(&Client::new(), &mock_server.uri(), Duration::from_secs(2))
        .await
        .unwrap();

    assert_eq!(health.database.as_deref(), Some("ok"));
    assert_eq!(health.version.as_deref(), Some("10.4.2"));
}

#[tokio::test]
async fn test_get_health_empty_body_is_ready() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let health = endpoints::get_health(&Client::new(), &mock_server.uri(), Duration::from_secs(2))
        .await
        .unwrap();

    assert!(health.version.is_none());
}

#[tokio::test]
async fn test_get_health_non_success_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503).set_body_string("starting"))
        .mount(&mock_server)
        .await;

    let err = endpoints::get_health(&Client::new(), &mock_server.uri(), Duration::from_secs(2))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_wait_until_ready_first_probe_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("health/ok.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result = client.wait_until_ready(&fast_policy(5), None).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_wait_until_ready_after_failures() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("health/ok.json")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let attempts = Arc::new(Mutex::new(Vec::new()));
    let attempts_clone = attempts.clone();
    let mut cb = move |attempt: u32, max: u32| {
        attempts_clone.lock().unwrap().push((attempt, max));
    };

    let client = client_for(&mock_server.uri());
    let health = client
        .wait_until_ready(&fast_policy(5), Some(&mut cb))
        .await
        .unwrap();

    assert_eq!(health.database.as_deref(), Some("ok"));
    assert_eq!(*attempts.lock().unwrap(), vec![(1, 5), (2, 5), (3, 5)]);
}

#[tokio::test]
async fn test_wait_until_ready_exhausts_budget() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let err = client
        .wait_until_ready(&fast_policy(3), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotReady { attempts: 3 }));
    assert!(err.is_connection_error());
}

#[tokio::test]
async fn test_wait_until_ready_connection_refused() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client_for(&format!("http://127.0.0.1:{port}"));
    let err = client
        .wait_until_ready(&fast_policy(3), None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::NotReady { attempts: 3 }));
}

#[tokio::test]
async fn test_wait_until_ready_probe_timeout_counts_as_not_ready() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let policy = grafana_client::ReadinessPolicy {
        interval: Duration::from_millis(10),
        max_attempts: 2,
        probe_timeout: Duration::from_millis(100),
    };
    let err = client.wait_until_ready(&policy, None).await.unwrap_err();

    assert!(matches!(err, ClientError::NotReady { attempts: 2 }));
}

#[tokio::test]
async fn test_health_probe_sends_no_credentials() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    client.wait_until_ready(&fast_policy(1), None).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}
