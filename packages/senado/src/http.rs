//! HTTP client wrapper for the open-data service.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{Result, SenadoError};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("congresso-senado/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Download the body of a URL in a single attempt.
///
/// Connection failures and non-success statuses are both reported as
/// `RemoteUnavailable`; there is no retry.
pub fn download_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let unavailable = |reason: String| SenadoError::RemoteUnavailable {
        url: url.to_string(),
        reason,
    };

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/xml")
        .send()
        .map_err(|e| unavailable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%url, %status, "Non-success response");
        return Err(unavailable(format!("HTTP status {status}")));
    }

    let bytes = response.bytes().map_err(|e| unavailable(e.to_string()))?;
    Ok(bytes.to_vec())
}
