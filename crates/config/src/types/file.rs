//! On-disk JSON config file schema.
//!
//! Every field is optional; values present in the file override built-in
//! defaults and are in turn overridden by environment variables.

use secrecy::SecretString;
use serde::Deserialize;

/// Module for deserializing optional secrets from plain strings.
mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.map(|s| SecretString::new(s.into())))
    }
}

/// Contents of a `grafana-setup` JSON config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetupFile {
    pub base_url: Option<String>,
    pub username: Option<String>,
    #[serde(default, deserialize_with = "secret_string::deserialize")]
    pub password: Option<SecretString>,
    #[serde(default, deserialize_with = "secret_string::deserialize")]
    pub api_token: Option<SecretString>,
    pub skip_verify: Option<bool>,
    pub timeout_seconds: Option<u64>,
    pub poll_interval_ms: Option<u64>,
    pub poll_attempts: Option<u32>,
    pub probe_timeout_seconds: Option<u64>,
    pub dashboards_glob: Option<String>,
    pub datasource_name: Option<String>,
    pub datasource_url: Option<String>,
}
