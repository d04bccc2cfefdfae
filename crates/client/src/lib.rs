//! Grafana HTTP API client.
//!
//! This crate provides a typed client for the small slice of the Grafana
//! HTTP API needed to provision an instance: health probing, datasource
//! creation, and dashboard import, plus the provisioning workflow that
//! strings them together.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod provision;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::GrafanaClient;
pub use client::builder::GrafanaClientBuilder;
pub use client::health::ReadinessPolicy;
pub use error::{ClientError, Result};
pub use models::{
    CreateDatasourceResponse, DatasourceDescriptor, DatasourceOutcome, HealthResponse,
    ImportDashboardRequest, ImportDashboardResponse,
};
pub use provision::{
    DashboardImport, ProvisionEvent, ProvisionReport, Provisioner, discover_dashboards,
    load_dashboard, prepare_import,
};
