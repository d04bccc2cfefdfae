//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map flags onto their `GRAFANA_*` environment variables.
//!
//! Invariants:
//! - Credential flags carry no clap `env` binding. The config loader reads
//!   `GRAFANA_USERNAME`/`GRAFANA_PASSWORD`/`GRAFANA_API_TOKEN` in the env layer,
//!   so an env token cannot override basic credentials given as flags.
//!
//! Non-responsibilities:
//! - Does not validate values beyond their type (see `grafana_config::ConfigLoader::build`).

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "grafana-setup")]
#[command(
    about = "Provision a Grafana instance: wait for it, register Prometheus, import dashboards",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-setup\n  grafana-setup --url http://grafana:3000 --dashboards 'dashboards/*.json'\n  GRAFANA_API_TOKEN=glsa_... grafana-setup --fail-on-error\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    #[arg(long, env = "GRAFANA_URL")]
    pub url: Option<String>,

    /// Username for basic authentication (env: GRAFANA_USERNAME)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for basic authentication (env: GRAFANA_PASSWORD)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Service account token, preferred over username/password from the same source (env: GRAFANA_API_TOKEN)
    #[arg(short, long)]
    pub api_token: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, env = "GRAFANA_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Request timeout in seconds
    #[arg(long, env = "GRAFANA_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Delay between health probes in milliseconds
    #[arg(long, env = "GRAFANA_POLL_INTERVAL_MS", value_name = "MS")]
    pub poll_interval_ms: Option<u64>,

    /// Maximum number of health probes before giving up
    #[arg(long, env = "GRAFANA_POLL_ATTEMPTS", value_name = "N")]
    pub poll_attempts: Option<u32>,

    /// Timeout of a single health probe in seconds
    #[arg(long, env = "GRAFANA_PROBE_TIMEOUT", value_name = "SECS")]
    pub probe_timeout: Option<u64>,

    /// Glob pattern of dashboard JSON files to import
    #[arg(short, long, env = "GRAFANA_DASHBOARDS_GLOB", value_name = "GLOB")]
    pub dashboards: Option<String>,

    /// Name of the Prometheus datasource
    #[arg(long, env = "GRAFANA_DATASOURCE_NAME")]
    pub datasource_name: Option<String>,

    /// URL Grafana uses to reach Prometheus
    #[arg(long, env = "GRAFANA_DATASOURCE_URL")]
    pub datasource_url: Option<String>,

    /// Path to a JSON configuration file.
    ///
    /// Can also be set via GRAFANA_SETUP_CONFIG environment variable.
    #[arg(long, env = "GRAFANA_SETUP_CONFIG", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Exit non-zero if the datasource or any dashboard was rejected
    #[arg(long)]
    pub fail_on_error: bool,
}
