//! Gemini generateContent driver. Key differences from the OpenAI style:
//! - API key is passed as a `?key=` query parameter, not in headers.
//! - No system role: the system framing is folded into the single user-facing
//!   prompt via [`PromptPair::combined`].
//! - Body shape is `contents[0].parts[0].text`, with `generationConfig`
//!   wrapping `temperature` and `maxOutputTokens`.
//! - Response text lives at `candidates[0].content.parts[0].text`.
//! - A rejected key comes back as HTTP 400, not 401.

use serde_json::{json, Value};
use std::collections::HashMap;
use url::form_urlencoded;

use crate::error::Error;
use crate::prompt::PromptPair;
use crate::provider::Provider;

use super::{classify_error_status, DriverRequest, ProviderDriver};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const GEMINI_MODEL: &str = "gemini-pro";

/// Gemini-style generate-content driver.
#[derive(Debug)]
pub struct GeminiDriver {
    base_url: String,
    model: String,
}

impl GeminiDriver {
    pub fn new() -> Self {
        Self::with_base_url(GEMINI_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: GEMINI_MODEL.to_string(),
        }
    }
}

impl Default for GeminiDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderDriver for GeminiDriver {
    fn provider(&self) -> Provider {
        Provider::Gemini
    }

    fn build_request(&self, prompt: &PromptPair, api_key: &str) -> Result<DriverRequest, Error> {
        // Keys may contain characters with query-string meaning; encode.
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("key", api_key)
            .finish();

        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt.combined() } ] }
            ],
            "generationConfig": {
                "temperature": prompt.temperature,
                "maxOutputTokens": prompt.max_output_tokens,
            },
        });

        Ok(DriverRequest {
            provider: Provider::Gemini,
            url: format!(
                "{}/v1beta/models/{}:generateContent?{}",
                self.base_url, self.model, query
            ),
            headers: HashMap::new(),
            body,
        })
    }

    fn parse_response(&self, status: u16, body: &Value) -> Result<String, Error> {
        if !(200..300).contains(&status) {
            return Err(classify_error_status(Provider::Gemini, status, body));
        }

        let content = body
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MalformedResponse {
                provider: Provider::Gemini,
                detail: "missing candidates[0].content.parts[0].text".to_string(),
            })?
            .trim();

        if content.is_empty() {
            return Err(Error::MalformedResponse {
                provider: Provider::Gemini,
                detail: "empty candidate content".to_string(),
            });
        }
        Ok(content.to_string())
    }
}
