//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define the main `Config` structure combining connection, auth, and provisioning.
//!
//! Invariants:
//! - `Config::default()` targets a local development Grafana (localhost:3000, admin/admin).

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PASSWORD, DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use crate::types::provisioning::ProvisioningConfig;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Connection configuration for the Grafana server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Timeout applied to datasource and dashboard requests
    pub timeout: Duration,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// What to provision and how long to wait for readiness
    pub provisioning: ProvisioningConfig,
}

impl Default for Config {
    /// Creates a configuration with Grafana's out-of-the-box admin credentials.
    ///
    /// These credentials are only appropriate for local development.
    fn default() -> Self {
        Self::with_basic_auth(
            DEFAULT_BASE_URL.to_string(),
            DEFAULT_USERNAME.to_string(),
            SecretString::new(DEFAULT_PASSWORD.to_string().into()),
        )
    }
}

impl Config {
    /// Create a config with basic auth and default provisioning settings.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                skip_verify: false,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            auth: AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            },
            provisioning: ProvisioningConfig::default(),
        }
    }

    /// Create a config with a service account token and default provisioning settings.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        let mut config = Self::default();
        config.connection.base_url = base_url;
        config.auth.strategy = AuthStrategy::ApiToken { token };
        config
    }

    /// Returns true if the config still uses Grafana's default admin/admin login.
    pub fn is_using_default_credentials(&self) -> bool {
        match &self.auth.strategy {
            AuthStrategy::Basic { username, password } => {
                username == DEFAULT_USERNAME && password.expose_secret() == DEFAULT_PASSWORD
            }
            AuthStrategy::ApiToken { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_grafana() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "http://localhost:3000");
        assert_eq!(config.auth.username(), Some("admin"));
        assert!(config.is_using_default_credentials());
    }

    #[test]
    fn test_api_token_is_not_default_credentials() {
        let config = Config::with_api_token(
            "http://grafana:3000".to_string(),
            SecretString::new("glsa_token".to_string().into()),
        );
        assert!(!config.is_using_default_credentials());
        assert_eq!(config.auth.username(), None);
    }

    #[test]
    fn test_debug_output_redacts_password() {
        let config = Config::with_basic_auth(
            "http://grafana:3000".to_string(),
            "ops".to_string(),
            SecretString::new("hunter2".to_string().into()),
        );
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
    }
}
