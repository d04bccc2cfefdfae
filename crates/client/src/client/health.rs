//! Health probing and the readiness wait.
//!
//! # Invariants
//! - A probe that fails for any reason (connection refused, timeout, non-2xx)
//!   counts as "not ready yet" and is never surfaced as an error on its own.
//! - At most `max_attempts` probes are issued; there is no sleep after the last one.

use std::time::Duration;
use tracing::{debug, info};

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::HealthResponse;
use grafana_config::ProvisioningConfig;

/// How long to wait for Grafana to become healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    /// Delay between failed probes
    pub interval: Duration,
    /// Maximum number of probes
    pub max_attempts: u32,
    /// Timeout of a single probe
    pub probe_timeout: Duration,
}

impl From<&ProvisioningConfig> for ReadinessPolicy {
    fn from(config: &ProvisioningConfig) -> Self {
        Self {
            interval: config.poll_interval,
            max_attempts: config.poll_attempts,
            probe_timeout: config.probe_timeout,
        }
    }
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self::from(&ProvisioningConfig::default())
    }
}

impl GrafanaClient {
    /// Probe the health endpoint once.
    pub async fn get_health(&self, timeout: Duration) -> Result<HealthResponse> {
        endpoints::get_health(&self.http, &self.base_url, timeout).await
    }

    /// Poll the health endpoint until it succeeds or the policy is exhausted.
    ///
    /// The callback, if given, receives `(attempt, max_attempts)` before each
    /// probe, with `attempt` starting at 1.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotReady`] after `max_attempts` failed probes.
    pub async fn wait_until_ready(
        &self,
        policy: &ReadinessPolicy,
        mut progress_cb: Option<&mut (dyn FnMut(u32, u32) + Send)>,
    ) -> Result<HealthResponse> {
        let max_attempts = policy.max_attempts.max(1);

        for attempt in 1..=max_attempts {
            if let Some(cb) = progress_cb.as_deref_mut() {
                cb(attempt, max_attempts);
            }

            match self.get_health(policy.probe_timeout).await {
                Ok(health) => {
                    info!(attempt, version = ?health.version, "Grafana is ready");
                    return Ok(health);
                }
                Err(e) => {
                    debug!(attempt, max_attempts, error = %e, "Grafana not ready yet");
                }
            }

            if attempt < max_attempts {
                tokio::time::sleep(policy.interval).await;
            }
        }

        Err(ClientError::NotReady {
            attempts: max_attempts,
        })
    }
}
