//! Dashboard file discovery and preparation.
//!
//! Invariants:
//! - Discovery order is the glob crate's order (alphabetical within each directory).
//! - Only the top-level `id` of a document is touched; every other field is sent as read.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{ClientError, Result};
use crate::models::ImportDashboardRequest;

/// Expand a glob pattern into the dashboard files it matches.
///
/// Matches that are not regular files are skipped, as are entries the glob
/// walker could not read (logged at warn level).
///
/// # Errors
///
/// Returns [`ClientError::InvalidPattern`] if the pattern itself is malformed.
pub fn discover_dashboards(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|e| ClientError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut found = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => found.push(path),
            Ok(path) => debug!(path = %path.display(), "Skipping non-file match"),
            Err(e) => warn!(
                path = %e.path().display(),
                error = %e.error(),
                "Skipping unreadable dashboard path"
            ),
        }
    }

    debug!(pattern, count = found.len(), "Discovered dashboards");
    Ok(found)
}

/// Read and parse a dashboard file.
pub fn load_dashboard(path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path).map_err(|source| ClientError::DashboardRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ClientError::DashboardParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Clear the dashboard's `id` and wrap it in an overwriting import request.
///
/// Grafana then matches an existing dashboard by `uid`/title instead of a
/// numeric id that is only meaningful on the instance the file was exported from.
///
/// # Errors
///
/// Returns [`ClientError::InvalidDashboard`] if the document is not a JSON object.
pub fn prepare_import(path: &Path, document: serde_json::Value) -> Result<ImportDashboardRequest> {
    let serde_json::Value::Object(mut dashboard) = document else {
        return Err(ClientError::InvalidDashboard {
            path: path.to_path_buf(),
            message: "top-level value must be a JSON object".to_string(),
        });
    };

    dashboard.insert("id".to_string(), serde_json::Value::Null);

    Ok(ImportDashboardRequest {
        dashboard: serde_json::Value::Object(dashboard),
        overwrite: true,
    })
}
