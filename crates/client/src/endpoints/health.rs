//! Health endpoint.

use reqwest::Client;
use std::time::Duration;

use crate::endpoints::request::{json_or_default, send_request};
use crate::error::Result;
use crate::models::HealthResponse;

/// Probe `GET /api/health` once with the given timeout.
///
/// Any 2xx status counts as healthy. The body is informational only. The
/// endpoint is unauthenticated, so no credentials are sent.
pub async fn get_health(
    client: &Client,
    base_url: &str,
    timeout: Duration,
) -> Result<HealthResponse> {
    let url = format!("{}/api/health", base_url);

    let builder = client.get(&url).timeout(timeout);
    let response = send_request(builder).await?;

    json_or_default(response, "health response").await
}
