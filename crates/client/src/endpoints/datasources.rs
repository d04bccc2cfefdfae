//! Datasource endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::endpoints::request::{json_or_default, send_request};
use crate::error::{ClientError, Result};
use crate::models::{CreateDatasourceResponse, DatasourceDescriptor, DatasourceOutcome};

/// Create a datasource.
///
/// A 409 response means a datasource with the same name already exists and
/// is reported as `DatasourceOutcome::AlreadyExists` rather than an error.
pub async fn create_datasource(
    client: &Client,
    base_url: &str,
    auth: &AuthStrategy,
    descriptor: &DatasourceDescriptor,
) -> Result<DatasourceOutcome> {
    let url = format!("{}/api/datasources", base_url);

    let builder = auth.apply(client.post(&url)).json(descriptor);

    match send_request(builder).await {
        Ok(response) => {
            let created: CreateDatasourceResponse =
                json_or_default(response, "datasource response").await?;
            debug!(name = %descriptor.name, id = ?created.id, "Datasource created");
            Ok(DatasourceOutcome::Created(created))
        }
        Err(ClientError::ApiError { status: 409, .. }) => {
            debug!(name = %descriptor.name, "Datasource already exists");
            Ok(DatasourceOutcome::AlreadyExists)
        }
        Err(e) => Err(e),
    }
}
