//! The provisioning workflow: readiness wait, datasource registration, dashboard import.
//!
//! Invariants:
//! - Steps run strictly in order; every request completes before the next is sent.
//! - Only an unready service or a malformed glob pattern aborts the run.
//!   Rejected submissions and broken dashboard files are recorded per item.

mod files;

pub use files::{discover_dashboards, load_dashboard, prepare_import};

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::client::GrafanaClient;
use crate::client::health::ReadinessPolicy;
use crate::error::{ClientError, Result};
use crate::models::{
    DatasourceDescriptor, DatasourceOutcome, HealthResponse, ImportDashboardResponse,
};
use grafana_config::Config;

/// Progress notifications emitted while provisioning.
#[derive(Debug)]
pub enum ProvisionEvent<'a> {
    /// About to issue health probe `attempt` of `max_attempts`.
    WaitingForReady { attempt: u32, max_attempts: u32 },
    Ready(&'a HealthResponse),
    RegisteringDatasource(&'a DatasourceDescriptor),
    DatasourceRegistered(&'a DatasourceOutcome),
    DatasourceFailed(&'a ClientError),
    DashboardsDiscovered { count: usize },
    ImportingDashboard(&'a Path),
    DashboardImported {
        path: &'a Path,
        response: &'a ImportDashboardResponse,
    },
    DashboardFailed {
        path: &'a Path,
        error: &'a ClientError,
    },
}

/// Outcome of importing a single dashboard file.
#[derive(Debug)]
pub struct DashboardImport {
    pub path: PathBuf,
    pub result: Result<ImportDashboardResponse>,
}

/// Everything a completed run did.
#[derive(Debug)]
pub struct ProvisionReport {
    pub datasource: Result<DatasourceOutcome>,
    pub dashboards: Vec<DashboardImport>,
}

impl ProvisionReport {
    pub fn imported_count(&self) -> usize {
        self.dashboards.iter().filter(|d| d.result.is_ok()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.dashboards.len() - self.imported_count()
    }

    /// True if the datasource or any dashboard was not accepted.
    pub fn has_failures(&self) -> bool {
        self.datasource.is_err() || self.failed_count() > 0
    }
}

type ProgressCallback<'a> = Option<&'a mut (dyn FnMut(&ProvisionEvent<'_>) + Send)>;

fn emit(progress_cb: &mut ProgressCallback<'_>, event: &ProvisionEvent<'_>) {
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(event);
    }
}

/// A provisioning plan for one Grafana instance.
#[derive(Debug, Clone)]
pub struct Provisioner {
    readiness: ReadinessPolicy,
    datasource: DatasourceDescriptor,
    dashboards_glob: String,
}

impl Provisioner {
    pub fn new(
        readiness: ReadinessPolicy,
        datasource: DatasourceDescriptor,
        dashboards_glob: impl Into<String>,
    ) -> Self {
        Self {
            readiness,
            datasource,
            dashboards_glob: dashboards_glob.into(),
        }
    }

    /// Build the plan from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidPattern`] if the dashboards glob is malformed,
    /// so a bad pattern is reported before Grafana is contacted.
    pub fn from_config(config: &Config) -> Result<Self> {
        let pattern = &config.provisioning.dashboards_glob;
        glob::Pattern::new(pattern).map_err(|e| ClientError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        Ok(Self::new(
            ReadinessPolicy::from(&config.provisioning),
            DatasourceDescriptor::from(&config.provisioning.datasource),
            pattern.clone(),
        ))
    }

    pub fn readiness(&self) -> &ReadinessPolicy {
        &self.readiness
    }

    pub fn datasource(&self) -> &DatasourceDescriptor {
        &self.datasource
    }

    pub fn dashboards_glob(&self) -> &str {
        &self.dashboards_glob
    }

    /// Run the whole workflow against `client`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotReady`] if Grafana never became healthy (nothing
    /// else is attempted), or [`ClientError::InvalidPattern`] for a malformed glob.
    pub async fn run(
        &self,
        client: &GrafanaClient,
        mut progress_cb: ProgressCallback<'_>,
    ) -> Result<ProvisionReport> {
        info!(base_url = %client.base_url(), "Waiting for Grafana");
        let health = {
            let forward: &mut (dyn FnMut(u32, u32) + Send) = &mut |attempt, max_attempts| {
                emit(
                    &mut progress_cb,
                    &ProvisionEvent::WaitingForReady {
                        attempt,
                        max_attempts,
                    },
                );
            };
            client.wait_until_ready(&self.readiness, Some(forward)).await?
        };
        emit(&mut progress_cb, &ProvisionEvent::Ready(&health));

        info!(name = %self.datasource.name, "Registering datasource");
        emit(
            &mut progress_cb,
            &ProvisionEvent::RegisteringDatasource(&self.datasource),
        );
        let datasource = client.create_datasource(&self.datasource).await;
        match &datasource {
            Ok(outcome) => emit(
                &mut progress_cb,
                &ProvisionEvent::DatasourceRegistered(outcome),
            ),
            Err(e) => {
                warn!(error = %e, "Datasource registration rejected");
                emit(&mut progress_cb, &ProvisionEvent::DatasourceFailed(e));
            }
        }

        let paths = discover_dashboards(&self.dashboards_glob)?;
        info!(count = paths.len(), pattern = %self.dashboards_glob, "Importing dashboards");
        emit(
            &mut progress_cb,
            &ProvisionEvent::DashboardsDiscovered { count: paths.len() },
        );

        let mut dashboards = Vec::with_capacity(paths.len());
        for path in paths {
            emit(&mut progress_cb, &ProvisionEvent::ImportingDashboard(&path));

            let result = import_file(client, &path).await;
            match &result {
                Ok(response) => {
                    debug!(path = %path.display(), uid = ?response.uid, "Dashboard imported");
                    emit(
                        &mut progress_cb,
                        &ProvisionEvent::DashboardImported {
                            path: &path,
                            response,
                        },
                    );
                }
                Err(error) => {
                    warn!(path = %path.display(), error = %error, "Dashboard import failed");
                    emit(
                        &mut progress_cb,
                        &ProvisionEvent::DashboardFailed { path: &path, error },
                    );
                }
            }

            dashboards.push(DashboardImport { path, result });
        }

        Ok(ProvisionReport {
            datasource,
            dashboards,
        })
    }
}

async fn import_file(client: &GrafanaClient, path: &Path) -> Result<ImportDashboardResponse> {
    let document = load_dashboard(path)?;
    let request = prepare_import(path, document)?;
    client.import_dashboard(&request).await
}
