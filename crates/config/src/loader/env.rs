//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GRAFANA_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric or boolean values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read and parse an environment variable, mapping parse failures to `InvalidValue`.
fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("GRAFANA_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("GRAFANA_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("GRAFANA_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none("GRAFANA_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = parse_env::<bool>("GRAFANA_SKIP_VERIFY", "must be true or false")? {
        loader.set_skip_verify(Some(skip));
    }
    if let Some(secs) = parse_env::<u64>("GRAFANA_TIMEOUT", "must be a number of seconds")? {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(ms) = parse_env::<u64>("GRAFANA_POLL_INTERVAL_MS", "must be a number of milliseconds")? {
        loader.set_poll_interval(Some(Duration::from_millis(ms)));
    }
    if let Some(attempts) = parse_env::<u32>("GRAFANA_POLL_ATTEMPTS", "must be a positive integer")? {
        loader.set_poll_attempts(Some(attempts));
    }
    if let Some(secs) = parse_env::<u64>("GRAFANA_PROBE_TIMEOUT", "must be a number of seconds")? {
        loader.set_probe_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(pattern) = env_var_or_none("GRAFANA_DASHBOARDS_GLOB") {
        loader.set_dashboards_glob(Some(pattern));
    }
    if let Some(name) = env_var_or_none("GRAFANA_DATASOURCE_NAME") {
        loader.set_datasource_name(Some(name));
    }
    if let Some(url) = env_var_or_none("GRAFANA_DATASOURCE_URL") {
        loader.set_datasource_url(Some(url));
    }

    Ok(())
}
