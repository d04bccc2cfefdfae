//! JSON config file loading.
//!
//! Invariants:
//! - File values are applied before environment variables (env vars take precedence).
//! - A configured but missing file is an error; no file configured is not.
//! - An explicit path wins over `GRAFANA_SETUP_CONFIG`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::types::SetupFile;

/// Read and parse a config file.
pub fn read_setup_file(path: &Path) -> Result<SetupFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply the configured file (if any) to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none("GRAFANA_SETUP_CONFIG")
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }
    let Some(path) = loader.config_path().cloned() else {
        return Ok(());
    };

    tracing::debug!(path = %path.display(), "Loading config file");
    let file = read_setup_file(&path)?;
    apply_setup_file(loader, file);
    Ok(())
}

fn apply_setup_file(loader: &mut ConfigLoader, file: SetupFile) {
    if let Some(url) = file.base_url {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = file.username {
        loader.set_username(Some(username));
    }
    if let Some(password) = file.password {
        loader.set_password(Some(password));
    }
    if let Some(token) = file.api_token {
        loader.set_api_token(Some(token));
    }
    if let Some(skip) = file.skip_verify {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = file.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(ms) = file.poll_interval_ms {
        loader.set_poll_interval(Some(Duration::from_millis(ms)));
    }
    if let Some(attempts) = file.poll_attempts {
        loader.set_poll_attempts(Some(attempts));
    }
    if let Some(secs) = file.probe_timeout_seconds {
        loader.set_probe_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(pattern) = file.dashboards_glob {
        loader.set_dashboards_glob(Some(pattern));
    }
    if let Some(name) = file.datasource_name {
        loader.set_datasource_name(Some(name));
    }
    if let Some(url) = file.datasource_url {
        loader.set_datasource_url(Some(url));
    }
}
