//! Environment-backed resolution of the three persisted settings.
//!
//! The surrounding layer owns persistence of exactly three values: the API
//! key, the provider, and the response mode. For library and CLI use those
//! are read from the environment. The provider defaults to OpenAI and the
//! mode to direct when unset, matching the persisted-settings fallbacks of
//! the original flow.

use std::env;
use tracing::warn;

use crate::error::Error;
use crate::prompt::ResponseMode;
use crate::provider::Provider;

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "EXPLAINER_API_KEY";
/// Environment variable naming the provider (`openai` or `gemini`).
pub const PROVIDER_VAR: &str = "EXPLAINER_PROVIDER";
/// Environment variable naming the response mode (`explain` or `direct`).
pub const MODE_VAR: &str = "EXPLAINER_MODE";

/// The three configuration values the core needs.
#[derive(Debug, Clone)]
pub struct ExplainerConfig {
    pub api_key: String,
    pub provider: Provider,
    pub mode: ResponseMode,
}

impl ExplainerConfig {
    /// Read the configuration from the environment.
    ///
    /// A missing or empty `EXPLAINER_API_KEY` is `MissingCredentials`; an
    /// unknown `EXPLAINER_PROVIDER` is `UnsupportedProvider`. An unknown
    /// `EXPLAINER_MODE` falls back to the default with a warning, since a
    /// stale mode value should not make the whole action unusable.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_values(
            env::var(API_KEY_VAR).ok(),
            env::var(PROVIDER_VAR).ok(),
            env::var(MODE_VAR).ok(),
        )
    }

    fn from_values(
        api_key: Option<String>,
        provider: Option<String>,
        mode: Option<String>,
    ) -> Result<Self, Error> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(Error::MissingCredentials)?;

        let provider = match provider.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.parse()?,
            _ => Provider::OpenAi,
        };

        let mode = match mode.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => ResponseMode::parse(name).unwrap_or_else(|| {
                warn!(value = name, "unrecognized response mode, using default");
                ResponseMode::default()
            }),
            _ => ResponseMode::default(),
        };

        Ok(Self {
            api_key,
            provider,
            mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_when_only_key_is_set() {
        let config = ExplainerConfig::from_values(Some("sk-test".into()), None, None).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.provider, Provider::OpenAi);
        assert_eq!(config.mode, ResponseMode::Direct);
    }

    #[test]
    fn test_explicit_values_win() {
        let config = ExplainerConfig::from_values(
            Some("AIza-test".into()),
            Some("gemini".into()),
            Some("explain".into()),
        )
        .unwrap();
        assert_eq!(config.provider, Provider::Gemini);
        assert_eq!(config.mode, ResponseMode::Explain);
    }

    #[test]
    fn test_missing_or_blank_key_is_missing_credentials() {
        for key in [None, Some("".to_string()), Some("   ".to_string())] {
            let err = ExplainerConfig::from_values(key, None, None).unwrap_err();
            assert!(matches!(err, Error::MissingCredentials));
        }
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let err =
            ExplainerConfig::from_values(Some("sk-test".into()), Some("mistral".into()), None)
                .unwrap_err();
        assert!(matches!(err, Error::UnsupportedProvider(_)));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let config = ExplainerConfig::from_values(
            Some("sk-test".into()),
            None,
            Some("chatty".into()),
        )
        .unwrap();
        assert_eq!(config.mode, ResponseMode::Direct);
    }
}
