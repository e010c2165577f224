//! Unified error taxonomy for the explanation pipeline.
//!
//! Every failure the core can produce is one variant here, and every variant
//! renders as a human-readable message suitable for direct display. Nothing is
//! fatal to the process: the caller may retry the whole action immediately, and
//! [`Error::retryable`] marks the kinds where that is likely to help.

use std::time::Duration;
use thiserror::Error;

use crate::provider::Provider;

/// Classified failure from the explanation pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// The selection was empty after trimming. Checked by the caller before
    /// invoking the core; re-validated here defensively.
    #[error("no text selected; select some text to explain")]
    EmptySelection,

    /// No API key configured.
    #[error("no API key configured; set one in the settings")]
    MissingCredentials,

    /// A provider name outside the supported set reached the parsing boundary.
    /// Produced before any network call is attempted.
    #[error("unsupported provider: {0}")]
    UnsupportedProvider(String),

    /// The provider rejected the API key (401 for OpenAI-style, 400 for
    /// Gemini-style, which reports bad keys as invalid requests).
    #[error("invalid {provider} API key; check your settings")]
    InvalidCredentials { provider: Provider },

    /// HTTP 429 from the provider.
    #[error("{provider} rate limit exceeded; try again later")]
    RateLimited { provider: Provider },

    /// HTTP 5xx from the provider.
    #[error("{provider} server error; try again later")]
    ProviderUnavailable { provider: Provider, status: u16 },

    /// Any other non-2xx response. `message` is the provider's own error text
    /// when present, else a generic `API error: <status>` string.
    #[error("{message}")]
    Provider {
        provider: Provider,
        status: u16,
        message: String,
    },

    /// A 2xx response whose JSON lacked the expected structure.
    #[error("invalid response format from {provider}: {detail}")]
    MalformedResponse { provider: Provider, detail: String },

    /// The call could not reach the provider at all (DNS/connection failure),
    /// as opposed to a provider-returned error.
    #[error("network error; check your internet connection")]
    Network(#[from] reqwest::Error),

    /// The bounded request timeout elapsed before the provider responded.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

impl Error {
    /// Whether an immediate user-triggered retry is likely to help.
    ///
    /// Transient conditions (rate limits, provider outages, network trouble)
    /// are retryable; configuration and request-shape failures are not.
    pub fn retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::ProviderUnavailable { .. }
                | Self::Network(_)
                | Self::Timeout(_)
        )
    }

    /// The provider involved, for failures past the dispatch boundary.
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::InvalidCredentials { provider }
            | Self::RateLimited { provider }
            | Self::ProviderUnavailable { provider, .. }
            | Self::Provider { provider, .. }
            | Self::MalformedResponse { provider, .. } => Some(*provider),
            _ => None,
        }
    }
}
