//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Build and validate the final `Config` from loaded values.
//!
//! Invariants / Assumptions:
//! - Config file values are applied first, then environment variables, then builder methods.
//! - Missing credentials fall back to Grafana's default admin/admin login.
//! - Credentials follow the layers: basic credentials from a later layer drop a
//!   token from an earlier one, and a later token drops earlier basic credentials.
//!   Within one layer an API token takes precedence over username/password.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PASSWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME, MAX_POLL_ATTEMPTS,
    MAX_POLL_INTERVAL_MS, MAX_TIMEOUT_SECS,
};
use crate::types::{
    AuthConfig, AuthStrategy, Config, ConnectionConfig, DatasourceConfig, ProvisioningConfig,
};

/// Configuration loader that builds config from files, environment variables, and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    poll_interval: Option<Duration>,
    poll_attempts: Option<u32>,
    probe_timeout: Option<Duration>,
    dashboards_glob: Option<String>,
    datasource_name: Option<String>,
    datasource_url: Option<String>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the JSON config file to read.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the config file, if one is configured.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over config file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.set_username(Some(username));
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.set_password(Some(SecretString::new(password.into())));
        self
    }

    /// Set the service account token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.set_api_token(Some(SecretString::new(token.into())));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the delay between health probes.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Set the maximum number of health probes.
    pub fn with_poll_attempts(mut self, attempts: u32) -> Self {
        self.poll_attempts = Some(attempts);
        self
    }

    /// Set the timeout of a single health probe.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = Some(timeout);
        self
    }

    /// Set the glob pattern used to discover dashboards.
    pub fn with_dashboards_glob(mut self, pattern: String) -> Self {
        self.dashboards_glob = Some(pattern);
        self
    }

    /// Set the datasource name.
    pub fn with_datasource_name(mut self, name: String) -> Self {
        self.datasource_name = Some(name);
        self
    }

    /// Set the datasource connection URL.
    pub fn with_datasource_url(mut self, url: String) -> Self {
        self.datasource_url = Some(url);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = validate_and_normalize_url(
            "base_url",
            self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL),
        )?;

        let strategy = if let Some(token) = self.api_token {
            AuthStrategy::ApiToken { token }
        } else {
            match (self.username, self.password) {
                (Some(username), Some(password)) => AuthStrategy::Basic { username, password },
                (None, Some(password)) => AuthStrategy::Basic {
                    username: DEFAULT_USERNAME.to_string(),
                    password,
                },
                (Some(_), None) => return Err(ConfigError::IncompleteBasicAuth),
                (None, None) => AuthStrategy::Basic {
                    username: DEFAULT_USERNAME.to_string(),
                    password: SecretString::new(DEFAULT_PASSWORD.to_string().into()),
                },
            }
        };

        let defaults = ProvisioningConfig::default();
        let default_datasource = DatasourceConfig::default();

        let datasource = DatasourceConfig {
            name: self.datasource_name.unwrap_or(default_datasource.name),
            url: match self.datasource_url {
                Some(url) => validate_and_normalize_url("datasource_url", &url)?,
                None => default_datasource.url,
            },
            ..default_datasource
        };

        let dashboards_glob = self.dashboards_glob.unwrap_or(defaults.dashboards_glob);
        if dashboards_glob.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "dashboards_glob".into(),
                message: "must not be blank".into(),
            });
        }

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        let provisioning = ProvisioningConfig {
            poll_interval: self.poll_interval.unwrap_or(defaults.poll_interval),
            poll_attempts: self.poll_attempts.unwrap_or(defaults.poll_attempts),
            probe_timeout: self.probe_timeout.unwrap_or(defaults.probe_timeout),
            dashboards_glob,
            datasource,
        };

        Self::validate_timeouts(&connection, &provisioning)?;
        Self::validate_polling(&provisioning)?;

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
            provisioning,
        })
    }

    /// Validates that request and probe timeouts are within `1..=MAX_TIMEOUT_SECS`.
    fn validate_timeouts(
        connection: &ConnectionConfig,
        provisioning: &ProvisioningConfig,
    ) -> Result<(), ConfigError> {
        for (name, timeout) in [
            ("timeout", connection.timeout),
            ("probe timeout", provisioning.probe_timeout),
        ] {
            if timeout.is_zero() {
                return Err(ConfigError::InvalidTimeout {
                    message: format!("{name} must be greater than 0 seconds"),
                });
            }
            if timeout.as_secs() > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidTimeout {
                    message: format!(
                        "{name} exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validates readiness polling settings.
    fn validate_polling(provisioning: &ProvisioningConfig) -> Result<(), ConfigError> {
        if provisioning.poll_attempts == 0 {
            return Err(ConfigError::InvalidPolling {
                message: "poll attempts must be at least 1".to_string(),
            });
        }
        if provisioning.poll_attempts > MAX_POLL_ATTEMPTS {
            return Err(ConfigError::InvalidPolling {
                message: format!(
                    "poll attempts must be between 1 and {} (got {})",
                    MAX_POLL_ATTEMPTS, provisioning.poll_attempts
                ),
            });
        }
        if provisioning.poll_interval.as_millis() > u128::from(MAX_POLL_INTERVAL_MS) {
            return Err(ConfigError::InvalidPolling {
                message: format!(
                    "poll interval exceeds maximum allowed value of {MAX_POLL_INTERVAL_MS} ms"
                ),
            });
        }
        Ok(())
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        if username.is_some() {
            self.api_token = None;
        }
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        if password.is_some() {
            self.api_token = None;
        }
        self.password = password;
    }

    /// Layers apply their token after username/password, so a token wins within a layer.
    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        if token.is_some() {
            self.username = None;
            self.password = None;
        }
        self.api_token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_poll_interval(&mut self, interval: Option<Duration>) {
        self.poll_interval = interval;
    }

    pub(crate) fn set_poll_attempts(&mut self, attempts: Option<u32>) {
        self.poll_attempts = attempts;
    }

    pub(crate) fn set_probe_timeout(&mut self, timeout: Option<Duration>) {
        self.probe_timeout = timeout;
    }

    pub(crate) fn set_dashboards_glob(&mut self, pattern: Option<String>) {
        self.dashboards_glob = pattern;
    }

    pub(crate) fn set_datasource_name(&mut self, name: Option<String>) {
        self.datasource_name = name;
    }

    pub(crate) fn set_datasource_url(&mut self, url: Option<String>) {
        self.datasource_url = url;
    }
}

/// Validates and normalizes a URL setting.
///
/// Validation rules:
/// - Trim surrounding whitespace; blank is `MissingBaseUrl` for the base URL
/// - Parse as an absolute URL with an http or https scheme and a host
/// - Return the trimmed input minus trailing slashes, never the re-serialized `Url`
fn validate_and_normalize_url(var: &str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(if var == "base_url" {
            ConfigError::MissingBaseUrl
        } else {
            ConfigError::InvalidValue {
                var: var.into(),
                message: "must not be blank".into(),
            }
        });
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: var.into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. http://localhost:3000): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: var.into(),
            message: "host is required (e.g. http://localhost:3000)".into(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
