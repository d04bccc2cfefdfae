//! Dashboard API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ImportDashboardRequest, ImportDashboardResponse};

impl GrafanaClient {
    /// Create or overwrite a dashboard.
    pub async fn import_dashboard(
        &self,
        request: &ImportDashboardRequest,
    ) -> Result<ImportDashboardResponse> {
        endpoints::import_dashboard(&self.http, &self.base_url, &self.auth, request).await
    }
}
