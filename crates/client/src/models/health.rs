//! Health endpoint model.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct HealthResponse {
    /// Database status, `ok` when healthy
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub commit: Option<String>,
}
