//! Data models for Grafana API requests and responses.
//!
//! Response types tolerate missing fields: Grafana versions differ in what
//! they return, and nothing downstream depends on any single field.

pub mod common;
pub mod dashboards;
pub mod datasources;
pub mod health;

pub use common::GrafanaMessage;
pub use dashboards::{ImportDashboardRequest, ImportDashboardResponse};
pub use datasources::{CreateDatasourceResponse, DatasourceDescriptor, DatasourceOutcome};
pub use health::HealthResponse;
