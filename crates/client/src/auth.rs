//! Authentication strategies applied to outgoing requests.

use grafana_config::AuthStrategy as ConfigAuthStrategy;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP basic authentication with a Grafana user.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Service account token, sent as a bearer token.
    ApiToken { token: SecretString },
}

impl AuthStrategy {
    /// Attach credentials to a request.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Self::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        }
    }
}

impl From<&ConfigAuthStrategy> for AuthStrategy {
    fn from(strategy: &ConfigAuthStrategy) -> Self {
        match strategy {
            ConfigAuthStrategy::Basic { username, password } => Self::Basic {
                username: username.clone(),
                password: password.clone(),
            },
            ConfigAuthStrategy::ApiToken { token } => Self::ApiToken {
                token: token.clone(),
            },
        }
    }
}
