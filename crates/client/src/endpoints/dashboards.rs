//! Dashboard endpoints.

use reqwest::Client;

use crate::auth::AuthStrategy;
use crate::endpoints::request::{json_or_default, send_request};
use crate::error::Result;
use crate::models::{ImportDashboardRequest, ImportDashboardResponse};

/// Create or overwrite a dashboard.
pub async fn import_dashboard(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    request: &ImportDashboardRequest,
) -> Result<ImportDashboardResponse> {
    let url = format!("{}/api/dashboards/db", base_url);

    let builder = auth.apply(client.post(&url)).json(request);
    let response = send_request(builder).await?;

    json_or_default(response, "dashboard import response").await
}
