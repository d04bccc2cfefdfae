//! grafana-setup - Provision a Grafana instance from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Layer configuration: defaults, config file, environment, flags.
//! - Run the provisioning workflow and map its outcome to an exit code.
//!
//! Does NOT handle:
//! - REST API implementation or the workflow itself (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to STDERR; STDOUT carries only progress lines.

mod args;
mod error;
mod provision;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use grafana_config::{Config, ConfigLoader};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if config.is_using_default_credentials() {
        tracing::warn!(
            "Using default Grafana credentials (admin/admin). \
             These are for local development only - change before production use."
        );
    }

    let exit_code = match provision::run(config, cli.fail_on_error).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Build configuration with precedence: flags > environment > config file > defaults.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored to allow fallback to defaults
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }

    loader = loader
        .from_file()
        .context("Failed to load configuration file")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(ms) = cli.poll_interval_ms {
        loader = loader.with_poll_interval(Duration::from_millis(ms));
    }
    if let Some(attempts) = cli.poll_attempts {
        loader = loader.with_poll_attempts(attempts);
    }
    if let Some(secs) = cli.probe_timeout {
        loader = loader.with_probe_timeout(Duration::from_secs(secs));
    }
    if let Some(ref pattern) = cli.dashboards {
        loader = loader.with_dashboards_glob(pattern.clone());
    }
    if let Some(ref name) = cli.datasource_name {
        loader = loader.with_datasource_name(name.clone());
    }
    if let Some(ref url) = cli.datasource_url {
        loader = loader.with_datasource_url(url.clone());
    }

    Ok(loader.build()?)
}
