//! Main Grafana HTTP API client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`health`]: Health probing and the readiness wait
//! - `datasources`: Datasource registration
//! - `dashboards`: Dashboard import
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Reading dashboard files from disk (see [`crate::provision`])

pub mod builder;
mod dashboards;
mod datasources;
pub mod health;

use crate::auth::AuthStrategy;

/// Grafana HTTP API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use grafana_client::{AuthStrategy, GrafanaClient};
/// use secrecy::SecretString;
///
/// let client = GrafanaClient::builder()
///     .base_url("http://localhost:3000".to_string())
///     .auth_strategy(AuthStrategy::Basic {
///         username: "admin".to_string(),
///         password: SecretString::new("admin".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct GrafanaClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
}

impl GrafanaClient {
    /// Create a new client builder.
    pub fn builder() -> builder::GrafanaClientBuilder {
        builder::GrafanaClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
