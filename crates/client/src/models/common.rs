//! Types shared across Grafana API models.

use serde::Deserialize;

/// Error body returned by most Grafana endpoints (`{"message": "..."}`).
#[derive(Debug, Deserialize, Clone)]
pub struct GrafanaMessage {
    pub message: String,
}
