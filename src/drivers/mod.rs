//! Provider driver abstraction, one implementation per wire format.
//!
//! Each driver knows how to build its provider's HTTP request (endpoint, auth
//! slot, body shape) from a [`PromptPair`], and how to turn the provider's
//! response (status code plus JSON body) into the one normalized outcome:
//! a trimmed non-empty string, or a classified [`Error`]. Selection happens
//! through [`create_driver`] by exhaustive match over [`Provider`], and the
//! rest of the pipeline works against `Box<dyn ProviderDriver>`.

pub mod gemini;

use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;

use crate::error::Error;
use crate::prompt::PromptPair;
use crate::provider::Provider;

pub use gemini::GeminiDriver;

/// Unified HTTP request representation for provider communication.
///
/// The API key appears in exactly one slot: the `Authorization` header for
/// OpenAI-style providers, the `key` query parameter inside `url` for
/// Gemini-style providers. It never appears in `body`.
#[derive(Debug, Clone)]
pub struct DriverRequest {
    /// Provider this request targets, for error attribution downstream.
    pub provider: Provider,
    /// Fully resolved target URL.
    pub url: String,
    /// Request headers beyond `Content-Type: application/json`.
    pub headers: HashMap<String, String>,
    /// JSON request body.
    pub body: Value,
}

/// Contract every provider adapter implements.
///
/// Object-safe so the service can hold `Box<dyn ProviderDriver>`. Both
/// methods are pure with respect to the network: I/O lives in
/// [`crate::transport::HttpTransport`].
pub trait ProviderDriver: Send + Sync + fmt::Debug {
    /// Which provider this driver speaks for.
    fn provider(&self) -> Provider;

    /// Build the provider-specific HTTP request for a prompt.
    fn build_request(&self, prompt: &PromptPair, api_key: &str) -> Result<DriverRequest, Error>;

    /// Validate and extract the normalized result from a provider response.
    ///
    /// A 2xx body missing the expected nested path is `MalformedResponse`,
    /// never a panic. Non-2xx statuses map onto the shared failure taxonomy.
    fn parse_response(&self, status: u16, body: &Value) -> Result<String, Error>;
}

/// Select the driver for a provider. `base_url_override` points drivers at a
/// test server instead of the production endpoint.
pub fn create_driver(
    provider: Provider,
    base_url_override: Option<&str>,
) -> Box<dyn ProviderDriver> {
    match provider {
        Provider::OpenAi => match base_url_override {
            Some(base) => Box::new(OpenAiDriver::with_base_url(base)),
            None => Box::new(OpenAiDriver::new()),
        },
        Provider::Gemini => match base_url_override {
            Some(base) => Box::new(GeminiDriver::with_base_url(base)),
            None => Box::new(GeminiDriver::new()),
        },
    }
}

/// Map a non-2xx status onto the shared failure taxonomy.
///
/// The auth cause differs per provider: OpenAI signals a rejected key with
/// 401, Gemini reports it as a 400 invalid request. Everything else is
/// uniform: 429 is rate limiting, 5xx is an outage, and any other status
/// carries the provider's own `error.message` when one is present.
pub(crate) fn classify_error_status(provider: Provider, status: u16, body: &Value) -> Error {
    let auth_status = match provider {
        Provider::OpenAi => 401,
        Provider::Gemini => 400,
    };
    if status == auth_status {
        return Error::InvalidCredentials { provider };
    }
    match status {
        429 => Error::RateLimited { provider },
        500..=599 => Error::ProviderUnavailable { provider, status },
        _ => {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("API error: {status}"));
            Error::Provider {
                provider,
                status,
                message,
            }
        }
    }
}

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const OPENAI_MODEL: &str = "gpt-4-turbo";

/// OpenAI-style chat-completion driver.
///
/// Bearer token in the `Authorization` header; body carries `model`, a
/// `messages` array (`system` then `user`), `max_tokens`, and `temperature`;
/// the result lives at `choices[0].message.content`.
#[derive(Debug)]
pub struct OpenAiDriver {
    base_url: String,
    model: String,
}

impl OpenAiDriver {
    pub fn new() -> Self {
        Self::with_base_url(OPENAI_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: OPENAI_MODEL.to_string(),
        }
    }
}

impl Default for OpenAiDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderDriver for OpenAiDriver {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    fn build_request(&self, prompt: &PromptPair, api_key: &str) -> Result<DriverRequest, Error> {
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": prompt.system_instruction },
                { "role": "user", "content": prompt.user_prompt },
            ],
            "max_tokens": prompt.max_output_tokens,
            "temperature": prompt.temperature,
        });

        let mut headers = HashMap::new();
        headers.insert("Authorization".to_string(), format!("Bearer {api_key}"));

        Ok(DriverRequest {
            provider: Provider::OpenAi,
            url: format!("{}/v1/chat/completions", self.base_url),
            headers,
            body,
        })
    }

    fn parse_response(&self, status: u16, body: &Value) -> Result<String, Error> {
        if !(200..300).contains(&status) {
            return Err(classify_error_status(Provider::OpenAi, status, body));
        }

        let content = body
            .pointer("/choices/0/message/content")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MalformedResponse {
                provider: Provider::OpenAi,
                detail: "missing choices[0].message.content".to_string(),
            })?
            .trim();

        if content.is_empty() {
            return Err(Error::MalformedResponse {
                provider: Provider::OpenAi,
                detail: "empty completion content".to_string(),
            });
        }
        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{build_prompt, ResponseMode};

    #[test]
    fn test_openai_build_request_shape() {
        let driver = OpenAiDriver::new();
        let prompt = build_prompt("2 + 2", ResponseMode::Direct);
        let req = driver.build_request(&prompt, "sk-test").unwrap();

        assert_eq!(req.url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(req.body["model"], "gpt-4-turbo");
        assert_eq!(req.body["messages"][0]["role"], "system");
        assert_eq!(req.body["messages"][1]["role"], "user");
        assert_eq!(req.body["max_tokens"], 60);
        assert_eq!(req.body["temperature"], 0.0);
    }

    #[test]
    fn test_openai_key_only_in_authorization_header() {
        let driver = OpenAiDriver::new();
        let prompt = build_prompt("hello", ResponseMode::Explain);
        let req = driver.build_request(&prompt, "sk-secret").unwrap();

        assert_eq!(req.headers["Authorization"], "Bearer sk-secret");
        assert!(!req.url.contains("sk-secret"));
        assert!(!req.body.to_string().contains("sk-secret"));
    }

    #[test]
    fn test_openai_parse_well_formed_response() {
        let driver = OpenAiDriver::new();
        let body = json!({
            "choices": [{ "message": { "content": "  X  " } }]
        });
        assert_eq!(driver.parse_response(200, &body).unwrap(), "X");
    }

    #[test]
    fn test_openai_parse_missing_path_is_malformed() {
        let driver = OpenAiDriver::new();
        for body in [
            json!({}),
            json!({ "choices": [] }),
            json!({ "choices": [{ "message": {} }] }),
            json!({ "choices": [{ "message": { "content": 42 } }] }),
        ] {
            let err = driver.parse_response(200, &body).unwrap_err();
            assert!(matches!(err, Error::MalformedResponse { .. }), "{body}");
        }
    }

    #[test]
    fn test_openai_parse_whitespace_only_content_is_malformed() {
        let driver = OpenAiDriver::new();
        let body = json!({ "choices": [{ "message": { "content": "   " } }] });
        let err = driver.parse_response(200, &body).unwrap_err();
        assert!(matches!(err, Error::MalformedResponse { .. }));
    }

    #[test]
    fn test_openai_status_mapping() {
        let driver = OpenAiDriver::new();
        let empty = json!({});

        assert!(matches!(
            driver.parse_response(401, &empty).unwrap_err(),
            Error::InvalidCredentials {
                provider: Provider::OpenAi
            }
        ));
        assert!(matches!(
            driver.parse_response(429, &empty).unwrap_err(),
            Error::RateLimited { .. }
        ));
        assert!(matches!(
            driver.parse_response(500, &empty).unwrap_err(),
            Error::ProviderUnavailable { status: 500, .. }
        ));
        assert!(matches!(
            driver.parse_response(503, &empty).unwrap_err(),
            Error::ProviderUnavailable { status: 503, .. }
        ));
    }

    #[test]
    fn test_openai_other_status_carries_provider_message() {
        let driver = OpenAiDriver::new();
        let body = json!({ "error": { "message": "You exceeded your current quota" } });
        match driver.parse_response(403, &body).unwrap_err() {
            Error::Provider {
                status, message, ..
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "You exceeded your current quota");
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_openai_other_status_without_message_is_generic() {
        let driver = OpenAiDriver::new();
        match driver.parse_response(404, &json!({})).unwrap_err() {
            Error::Provider { message, .. } => assert_eq!(message, "API error: 404"),
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[test]
    fn test_create_driver_matches_provider() {
        assert_eq!(
            create_driver(Provider::OpenAi, None).provider(),
            Provider::OpenAi
        );
        assert_eq!(
            create_driver(Provider::Gemini, None).provider(),
            Provider::Gemini
        );
    }
}
