//! HTTP transport owning the reqwest client and network-failure
//! classification.
//!
//! The transport draws the line the error taxonomy depends on: a failure to
//! reach the provider at all is `Network` (or `Timeout` when the bounded
//! request timeout elapsed), while anything the provider answered, however
//! unhappily, is handed back to the driver as a status code plus JSON body
//! for provider-specific classification.

use serde_json::{json, Value};
use std::env;
use std::time::Duration;
use tracing::{debug, warn};

use crate::drivers::DriverRequest;
use crate::error::Error;

/// Default request timeout when neither the builder nor the environment
/// overrides it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Resolve the default timeout, honoring `EXPLAINER_HTTP_TIMEOUT_SECS`.
pub fn default_timeout() -> Duration {
    let secs = env::var("EXPLAINER_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Thin wrapper around a [`reqwest::Client`] with a bounded timeout.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// POST the driver's request and return the status plus decoded JSON body.
    ///
    /// A 2xx body that is not valid JSON is `MalformedResponse`. A non-2xx
    /// body that is not valid JSON decodes to an empty object so status
    /// classification still runs on it.
    pub async fn execute(&self, request: &DriverRequest) -> Result<(u16, Value), Error> {
        // Log the provider, never the URL: the Gemini URL carries the key.
        debug!(provider = %request.provider, "dispatching provider request");

        let mut req = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout)
            } else {
                Error::Network(e)
            }
        })?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            let body = response.json::<Value>().await.map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.timeout)
                } else {
                    Error::MalformedResponse {
                        provider: request.provider,
                        detail: format!("response body is not valid JSON: {e}"),
                    }
                }
            })?;
            Ok((status, body))
        } else {
            warn!(provider = %request.provider, status, "provider returned error status");
            let body = response.json::<Value>().await.unwrap_or_else(|_| json!({}));
            Ok((status, body))
        }
    }
}
