//! The closed set of supported providers.
//!
//! The original design branched on raw provider strings; here the set is a
//! tagged enum selected by exhaustive match, so adding or misnaming a provider
//! is a compile-time concern. The only place an unknown provider name can
//! surface is [`Provider::from_str`], which is where configuration strings
//! enter the core.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A supported language-model provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// OpenAI-style chat-completion API (`/v1/chat/completions`).
    OpenAi,
    /// Gemini-style generate-content API (`models/{model}:generateContent`).
    Gemini,
}

impl Provider {
    /// Canonical lowercase name, as persisted in configuration (`"openai"`,
    /// `"gemini"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }

    /// Human-readable name used in error messages shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            other => Err(Error::UnsupportedProvider(other.to_string())),
        }
    }
}
