//! Shared test utilities for grafana-setup integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All `GRAFANA_*` variables from the host are cleared.
//! - Polling is fast (10ms interval) so failing readiness tests finish quickly.

use assert_cmd::Command;

const GRAFANA_VARS: &[&str] = &[
    "GRAFANA_URL",
    "GRAFANA_USERNAME",
    "GRAFANA_PASSWORD",
    "GRAFANA_API_TOKEN",
    "GRAFANA_SKIP_VERIFY",
    "GRAFANA_TIMEOUT",
    "GRAFANA_POLL_INTERVAL_MS",
    "GRAFANA_POLL_ATTEMPTS",
    "GRAFANA_PROBE_TIMEOUT",
    "GRAFANA_DASHBOARDS_GLOB",
    "GRAFANA_DATASOURCE_NAME",
    "GRAFANA_DATASOURCE_URL",
    "GRAFANA_SETUP_CONFIG",
];

/// Returns a hermetic `grafana-setup` command for integration testing.
pub fn setup_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-setup");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    for var in GRAFANA_VARS {
        cmd.env_remove(var);
    }
    cmd.env("GRAFANA_POLL_INTERVAL_MS", "10");

    cmd
}

/// Hermetic command pointed at `base_url`, importing dashboards matching `glob`.
#[allow(dead_code)]
pub fn setup_cmd_for(base_url: &str, glob: &str) -> Command {
    let mut cmd = setup_cmd();
    cmd.env("GRAFANA_URL", base_url)
        .env("GRAFANA_DASHBOARDS_GLOB", glob);
    cmd
}
