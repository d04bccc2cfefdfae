//! Error types for the Grafana client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Grafana client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS failure, timeout, ...).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from Grafana.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Missing or unusable credentials.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Grafana did not report healthy within the probe budget.
    #[error("Grafana did not become ready after {attempts} health checks")]
    NotReady { attempts: u32 },

    /// The dashboard glob pattern is malformed.
    #[error("Invalid dashboard pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// A dashboard file could not be read.
    #[error("Failed to read dashboard {}: {source}", .path.display())]
    DashboardRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dashboard file is not valid JSON.
    #[error("Failed to parse dashboard {}: {source}", .path.display())]
    DashboardParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A dashboard file is valid JSON but not a dashboard object.
    #[error("Invalid dashboard {}: {message}", .path.display())]
    InvalidDashboard { path: PathBuf, message: String },
}

impl ClientError {
    /// Check if this error means the server could not be reached at all.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            Self::NotReady { .. } => true,
            _ => false,
        }
    }

    /// Check if this error comes from a local dashboard file rather than Grafana.
    pub fn is_local_file_error(&self) -> bool {
        matches!(
            self,
            Self::DashboardRead { .. } | Self::DashboardParse { .. } | Self::InvalidDashboard { .. }
        )
    }

    /// HTTP status of an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
