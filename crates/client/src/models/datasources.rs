//! Datasource models.

use grafana_config::DatasourceConfig;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/datasources`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DatasourceDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub access: String,
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

impl From<&DatasourceConfig> for DatasourceDescriptor {
    fn from(config: &DatasourceConfig) -> Self {
        Self {
            name: config.name.clone(),
            kind: config.kind.clone(),
            url: config.url.clone(),
            access: config.access.clone(),
            is_default: config.is_default,
        }
    }
}

/// Success body of `POST /api/datasources`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct CreateDatasourceResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of registering a datasource.
#[derive(Debug, Clone)]
pub enum DatasourceOutcome {
    Created(CreateDatasourceResponse),
    /// Grafana answered 409: a datasource with this name is already present.
    AlreadyExists,
}
