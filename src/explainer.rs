//! Explanation service, the single entry point consumed by the surrounding
//! UI layer.
//!
//! [`Explainer::explain`] validates the request, builds the prompt, selects
//! the matching provider driver, performs the one network call, and returns
//! the normalized string or the driver's classified error unchanged. No
//! retries happen here: one attempt per call, and the caller re-invokes the
//! whole action when the user asks again.

use std::time::Duration;
use tracing::debug;

use crate::drivers::create_driver;
use crate::error::Error;
use crate::prompt::{build_prompt, ResponseMode};
use crate::provider::Provider;
use crate::transport::{default_timeout, HttpTransport};

/// One explanation request: the selected text plus the three configuration
/// values the surrounding layer persists.
#[derive(Debug, Clone)]
pub struct ExplainRequest {
    pub text: String,
    pub api_key: String,
    pub provider: Provider,
    pub mode: ResponseMode,
}

impl ExplainRequest {
    pub fn new(
        text: impl Into<String>,
        api_key: impl Into<String>,
        provider: Provider,
        mode: ResponseMode,
    ) -> Self {
        Self {
            text: text.into(),
            api_key: api_key.into(),
            provider,
            mode,
        }
    }
}

/// The explanation service. Holds no per-request state; one instance may be
/// shared across concurrent independent calls.
#[derive(Debug)]
pub struct Explainer {
    transport: HttpTransport,
    base_url_override: Option<String>,
}

/// Builder for [`Explainer`].
#[derive(Debug, Default)]
pub struct ExplainerBuilder {
    timeout: Option<Duration>,
    base_url_override: Option<String>,
}

impl ExplainerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the network call. Defaults to 30 s, overridable via
    /// `EXPLAINER_HTTP_TIMEOUT_SECS`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Point every driver at this base URL instead of the production
    /// endpoint. Intended for tests against a local mock server.
    pub fn base_url_override(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    pub fn build(self) -> Result<Explainer, Error> {
        let timeout = self.timeout.unwrap_or_else(default_timeout);
        Ok(Explainer {
            transport: HttpTransport::new(timeout)?,
            base_url_override: self.base_url_override,
        })
    }
}

impl Explainer {
    /// Create a service with default settings.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> ExplainerBuilder {
        ExplainerBuilder::new()
    }

    /// Explain (or directly answer) the selected text.
    ///
    /// Returns the provider's content trimmed of surrounding whitespace and
    /// otherwise unmodified, or the first classified failure encountered,
    /// propagated as-is with the original message intact.
    pub async fn explain(&self, request: &ExplainRequest) -> Result<String, Error> {
        if request.text.trim().is_empty() {
            return Err(Error::EmptySelection);
        }
        if request.api_key.trim().is_empty() {
            return Err(Error::MissingCredentials);
        }

        let prompt = build_prompt(&request.text, request.mode);
        let driver = create_driver(request.provider, self.base_url_override.as_deref());
        debug!(provider = %request.provider, mode = ?request.mode, "requesting explanation");

        let http_request = driver.build_request(&prompt, &request.api_key)?;
        let (status, body) = self.transport.execute(&http_request).await?;
        driver.parse_response(status, &body)
    }
}
