//! HTTP client for the fetch action.

use launchkit_core::{parse_payload, Endpoint, LaunchError};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::debug;

/// Timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HTTP client performing a single timeout-bounded GET per call.
///
/// There is no retry logic: the first transport failure is reported as-is.
/// Redirects follow reqwest's default policy.
///
/// # Examples
///
/// ```no_run
/// use launchkit::client::FetchClient;
/// use launchkit_core::Endpoint;
///
/// # async fn example() -> Result<(), launchkit_core::LaunchError> {
/// let client = FetchClient::with_timeout(10)?;
/// let value = client.fetch_json(&Endpoint::from("https://api.github.com")).await?;
/// println!("{}", value);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    timeout: Duration,
}

impl FetchClient {
    /// Create a client whose requests time out after `timeout_secs` seconds.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchError::Transport`] if the underlying HTTP client
    /// cannot be created (e.g. TLS backend initialisation failure).
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, LaunchError> {
        let timeout = Duration::from_secs(timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("launchkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LaunchError::Transport(transport_reason(&e)))?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch `endpoint` and decode its body as JSON.
    ///
    /// # Errors
    ///
    /// - [`LaunchError::Transport`] on connection, DNS, timeout, malformed
    ///   URL or non-2xx status
    /// - [`LaunchError::InvalidJson`] if the body is not UTF-8 JSON
    pub async fn fetch_json(&self, endpoint: &Endpoint) -> Result<Value, LaunchError> {
        debug!(endpoint = %endpoint, timeout_secs = self.timeout.as_secs(), "Sending GET request");

        let response = self
            .client
            .get(endpoint.as_str())
            .send()
            .await
            .map_err(|e| {
                debug!(error = ?e, "Request failed");
                LaunchError::Transport(transport_reason(&e))
            })?;

        let status = response.status();
        debug!(status = %status, url = %response.url(), "Received response");

        if !status.is_success() {
            return Err(LaunchError::Transport(status_reason(status)));
        }

        let body = response.bytes().await.map_err(|e| {
            debug!(error = ?e, "Failed to read response body");
            LaunchError::Transport(transport_reason(&e))
        })?;
        debug!(bytes = body.len(), "Read response body");

        parse_payload(&body).map_err(|e| {
            if let LaunchError::InvalidJson(ref source) = e {
                debug!(error = %source, "Response body is not JSON");
            }
            e
        })
    }
}

/// Reason phrase for a non-success status, e.g. `Not Found`.
fn status_reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_str().to_string())
}

/// Short reason for a transport failure.
///
/// Timeouts read `timed out`; everything else reports the innermost cause,
/// which carries the OS or resolver message rather than reqwest's wrapper.
fn transport_reason(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "timed out".to_string();
    }

    let mut innermost: &dyn StdError = err;
    while let Some(source) = innermost.source() {
        innermost = source;
    }

    let reason = innermost.to_string();
    if reason.is_empty() {
        err.to_string()
    } else {
        reason
    }
}
