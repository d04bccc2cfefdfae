//! Authentication types for Grafana configuration.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication with a Grafana user.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Service account token (bearer authentication).
    ApiToken { token: SecretString },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}

impl AuthConfig {
    /// Username to show in user-facing messages, if basic auth is in use.
    pub fn username(&self) -> Option<&str> {
        match &self.strategy {
            AuthStrategy::Basic { username, .. } => Some(username),
            AuthStrategy::ApiToken { .. } => None,
        }
    }
}
