//! Datasource API methods for [`GrafanaClient`].

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DatasourceDescriptor, DatasourceOutcome};

impl GrafanaClient {
    /// Register a datasource. An existing datasource of the same name is not an error.
    pub async fn create_datasource(
        &self,
        descriptor: &DatasourceDescriptor,
    ) -> Result<DatasourceOutcome> {
        endpoints::create_datasource(&self.http, &self.base_url, &self.auth, descriptor).await
    }
}
