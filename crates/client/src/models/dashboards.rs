//! Dashboard import models.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/dashboards/db`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ImportDashboardRequest {
    /// The dashboard document, with its `id` cleared
    pub dashboard: serde_json::Value,
    pub overwrite: bool,
}

/// Success body of `POST /api/dashboards/db`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ImportDashboardResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub uid: Option<String>,
    /// Path of the dashboard relative to the Grafana root (e.g. `/d/abc/name`)
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub slug: Option<String>,
}

impl ImportDashboardResponse {
    /// Absolute browser URL of the imported dashboard, if Grafana returned a path.
    pub fn browse_url(&self, base_url: &str) -> Option<String> {
        self.url.as_deref().map(|path| {
            if path.starts_with("http://") || path.starts_with("https://") {
                path.to_string()
            } else {
                format!("{}{}", base_url.trim_end_matches('/'), path)
            }
        })
    }
}
