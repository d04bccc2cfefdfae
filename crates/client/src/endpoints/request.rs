//! Request execution and error mapping.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::GrafanaMessage;

/// Sends an HTTP request and converts non-success responses into `ApiError`.
///
/// Transport failures propagate as `ClientError::HttpError`. For non-2xx
/// responses, Grafana's `{"message": ...}` body is used as the error message
/// when present, otherwise the raw body text.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    debug!(status, url = %url, "Grafana returned non-success status");

    let message = match serde_json::from_str::<GrafanaMessage>(&body) {
        Ok(m) => m.message,
        Err(_) => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}

/// Parse a JSON success body leniently.
///
/// The request already succeeded, so an empty or unparseable body yields the
/// type's default instead of an error.
pub(crate) async fn json_or_default<T>(response: Response, what: &str) -> Result<T>
where
    T: serde::de::DeserializeOwned + Default,
{
    let body = response.text().await?;
    if body.trim().is_empty() {
        return Ok(T::default());
    }

    Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
        debug!(error = %e, "Ignoring unparseable {}", what);
        T::default()
    }))
}
