//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here use Basic auth `admin`/`admin` unless stated otherwise
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use grafana_client::testing::{load_fixture, write_dashboard};

#[allow(unused_imports)]
pub use grafana_client::{AuthStrategy, ClientError, GrafanaClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Basic auth credentials matching Grafana's out-of-the-box admin account.
#[allow(dead_code)]
pub fn admin_auth() -> AuthStrategy {
    AuthStrategy::Basic {
        username: "admin".to_string(),
        password: secrecy::SecretString::new("admin".to_string().into()),
    }
}

/// Build a client pointed at `base_url` with admin credentials.
#[allow(dead_code)]
pub fn client_for(base_url: &str) -> GrafanaClient {
    GrafanaClient::builder()
        .base_url(base_url.to_string())
        .auth_strategy(admin_auth())
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client builds")
}

/// A readiness policy short enough for tests.
#[allow(dead_code)]
pub fn fast_policy(max_attempts: u32) -> grafana_client::ReadinessPolicy {
    grafana_client::ReadinessPolicy {
        interval: Duration::from_millis(10),
        max_attempts,
        probe_timeout: Duration::from_millis(500),
    }
}

/// `Authorization` header value for `admin:admin`.
#[allow(dead_code)]
pub const ADMIN_BASIC_HEADER: &str = "Basic YWRtaW46YWRtaW4=";
