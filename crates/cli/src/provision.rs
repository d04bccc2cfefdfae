//! The provisioning command.
//!
//! Responsibilities:
//! - Build the client and provisioning plan from loaded configuration.
//! - Print one progress line per workflow event to STDOUT.
//! - Summarize the run and choose the exit code.
//!
//! Non-responsibilities:
//! - Diagnostics go through `tracing` (STDERR); this module only prints progress.

use anyhow::{Context, Result};
use grafana_client::{DatasourceOutcome, GrafanaClient, ProvisionEvent, ProvisionReport, Provisioner};
use grafana_config::Config;

use crate::error::ExitCode;

pub async fn run(config: Config, fail_on_error: bool) -> Result<ExitCode> {
    let provisioner =
        Provisioner::from_config(&config).context("Invalid provisioning configuration")?;
    let client = GrafanaClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to build Grafana client")?;

    let base_url = client.base_url().to_string();
    let mut print_event = |event: &ProvisionEvent<'_>| {
        if let Some(line) = render_event(event, &base_url) {
            println!("{}", line);
        }
    };

    let report = match provisioner.run(&client, Some(&mut print_event)).await {
        Ok(report) => report,
        Err(e) if e.is_connection_error() => {
            println!("Could not connect to Grafana.");
            return Err(e).context(format!("Grafana at {} is not reachable", base_url));
        }
        Err(e) => return Err(e).context("Provisioning failed"),
    };

    println!();
    println!("{}", render_summary(&report, &config));

    if fail_on_error && report.has_failures() {
        return Ok(ExitCode::GeneralError);
    }
    Ok(ExitCode::Success)
}

/// Progress line for an event, if it warrants one.
fn render_event(event: &ProvisionEvent<'_>, base_url: &str) -> Option<String> {
    match event {
        ProvisionEvent::WaitingForReady { attempt: 1, .. } => {
            Some("Waiting for Grafana to be ready...".to_string())
        }
        ProvisionEvent::WaitingForReady { .. } => None,
        ProvisionEvent::Ready(health) => Some(match &health.version {
            Some(version) => format!("Grafana is up! (version {})", version),
            None => "Grafana is up!".to_string(),
        }),
        ProvisionEvent::RegisteringDatasource(descriptor) => {
            Some(format!("Creating {} Datasource...", descriptor.name))
        }
        ProvisionEvent::DatasourceRegistered(DatasourceOutcome::Created(_)) => {
            Some("Datasource created.".to_string())
        }
        ProvisionEvent::DatasourceRegistered(DatasourceOutcome::AlreadyExists) => {
            Some("Datasource already exists.".to_string())
        }
        ProvisionEvent::DatasourceFailed(error) => {
            Some(format!("Failed to create datasource: {}", error))
        }
        ProvisionEvent::DashboardsDiscovered { count: 0 } => {
            Some("No dashboards found.".to_string())
        }
        ProvisionEvent::DashboardsDiscovered { .. } => None,
        ProvisionEvent::ImportingDashboard(path) => {
            Some(format!("Importing {}...", path.display()))
        }
        ProvisionEvent::DashboardImported { response, .. } => {
            Some(match response.browse_url(base_url) {
                Some(url) => format!("Success! URL: {}", url),
                None => "Success!".to_string(),
            })
        }
        ProvisionEvent::DashboardFailed { path, error } => {
            Some(format!("Failed to import {}: {}", path.display(), error))
        }
    }
}

fn render_summary(report: &ProvisionReport, config: &Config) -> String {
    let mut summary = format!(
        "SETUP COMPLETE. Imported {} of {} dashboards",
        report.imported_count(),
        report.dashboards.len()
    );
    if report.datasource.is_err() {
        summary.push_str("; datasource was not registered");
    }
    summary.push('.');

    if let Some(username) = config.auth.username() {
        summary.push_str(&format!(" Login with {}.", username));
    }
    summary
}
