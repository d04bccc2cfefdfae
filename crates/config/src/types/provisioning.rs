//! Provisioning settings: readiness polling, datasource, and dashboard discovery.

use std::time::Duration;

use crate::constants::{
    DEFAULT_DASHBOARDS_GLOB, DEFAULT_DATASOURCE_ACCESS, DEFAULT_DATASOURCE_NAME,
    DEFAULT_DATASOURCE_TYPE, DEFAULT_DATASOURCE_URL, DEFAULT_POLL_ATTEMPTS,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_PROBE_TIMEOUT_SECS,
};

/// The datasource registered during provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasourceConfig {
    pub name: String,
    /// Grafana plugin type (e.g. `prometheus`)
    pub kind: String,
    pub url: String,
    /// `proxy` (server side) or `direct` (browser side)
    pub access: String,
    pub is_default: bool,
}

impl Default for DatasourceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DATASOURCE_NAME.to_string(),
            kind: DEFAULT_DATASOURCE_TYPE.to_string(),
            url: DEFAULT_DATASOURCE_URL.to_string(),
            access: DEFAULT_DATASOURCE_ACCESS.to_string(),
            is_default: true,
        }
    }
}

/// Settings for the provisioning workflow.
#[derive(Debug, Clone)]
pub struct ProvisioningConfig {
    /// Delay between failed health probes
    pub poll_interval: Duration,
    /// Maximum number of health probes
    pub poll_attempts: u32,
    /// Timeout for a single health probe
    pub probe_timeout: Duration,
    /// Glob pattern matching dashboard JSON files
    pub dashboards_glob: String,
    pub datasource: DatasourceConfig,
}

impl Default for ProvisioningConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            poll_attempts: DEFAULT_POLL_ATTEMPTS,
            probe_timeout: Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            dashboards_glob: DEFAULT_DASHBOARDS_GLOB.to_string(),
            datasource: DatasourceConfig::default(),
        }
    }
}
