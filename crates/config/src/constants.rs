//! Centralized constants for the Grafana setup workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Credential Defaults
// =============================================================================

/// Default Grafana base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default Grafana admin username.
pub const DEFAULT_USERNAME: &str = "admin";

/// Default Grafana admin password.
pub const DEFAULT_PASSWORD: &str = "admin";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Readiness Polling Defaults
// =============================================================================

/// Default delay between health probes in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

/// Default number of health probes before giving up.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 30;

/// Default timeout for a single health probe in seconds.
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 2;

// =============================================================================
// Provisioning Defaults
// =============================================================================

/// Default glob pattern used to discover dashboard definitions.
pub const DEFAULT_DASHBOARDS_GLOB: &str = "charts/sre-platform/dashboards/*.json";

/// Default datasource name.
pub const DEFAULT_DATASOURCE_NAME: &str = "Prometheus";

/// Default datasource plugin type.
pub const DEFAULT_DATASOURCE_TYPE: &str = "prometheus";

/// Default datasource connection URL.
pub const DEFAULT_DATASOURCE_URL: &str = "http://sre-prometheus:9090";

/// Default datasource access mode (Grafana server proxies the queries).
pub const DEFAULT_DATASOURCE_ACCESS: &str = "proxy";

// =============================================================================
// Validation Bounds
// =============================================================================

/// Maximum allowed request or probe timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Maximum allowed poll interval in milliseconds (1 hour).
pub const MAX_POLL_INTERVAL_MS: u64 = 3_600_000;

/// Maximum allowed number of health probes.
pub const MAX_POLL_ATTEMPTS: u32 = 1000;
