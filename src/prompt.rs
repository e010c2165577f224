//! Prompt construction per response mode.
//!
//! A pure, deterministic mapping from `(text, mode)` to a [`PromptPair`].
//! Two fixed profiles exist, a terse answer-only profile and a discursive
//! explanation profile, differing in instruction text, output budget, and
//! temperature.
//!
//! The selected text is wrapped in double quotes inside the user prompt so it
//! stays visually delimited from the instructions. That is a readability
//! measure, not a defense against prompt injection from the selection.

use serde::{Deserialize, Serialize};

const DIRECT_SYSTEM_INSTRUCTION: &str = "You are a precision answerer. Given any question or text, \
     respond with ONLY the final answer. No sentences, no explanations, no reasoning, no \
     punctuation beyond the answer itself. If it's multiple choice, return just the exact option \
     letter or text.";

const EXPLAIN_SYSTEM_INSTRUCTION: &str = "You are a helpful assistant that explains text clearly \
     and concisely. Provide explanations that are easy to understand, with context and examples \
     when helpful.";

const DIRECT_MAX_OUTPUT_TOKENS: u32 = 60;
const EXPLAIN_MAX_OUTPUT_TOKENS: u32 = 500;

const DIRECT_TEMPERATURE: f64 = 0.0;
const EXPLAIN_TEMPERATURE: f64 = 0.7;

/// How the model should respond: a terse single answer or a discursive
/// explanation. Controls prompt framing and generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseMode {
    /// Clear, example-friendly explanation of the selected text.
    Explain,
    /// Only the final answer, nothing else.
    #[default]
    Direct,
}

impl ResponseMode {
    /// Canonical lowercase name, as persisted in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Explain => "explain",
            Self::Direct => "direct",
        }
    }

    /// Parse a configuration value. Returns `None` for unrecognized names so
    /// the caller decides whether to fall back or reject.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explain" => Some(Self::Explain),
            "direct" => Some(Self::Direct),
            _ => None,
        }
    }
}

/// Provider-independent prompt material derived from `(text, mode)`.
///
/// Providers with a system role send `system_instruction` and `user_prompt`
/// separately; providers without one use [`PromptPair::combined`].
#[derive(Debug, Clone, PartialEq)]
pub struct PromptPair {
    pub system_instruction: &'static str,
    pub user_prompt: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
}

impl PromptPair {
    /// System framing folded directly into the user-facing prompt, for
    /// providers that take a single text block.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.system_instruction, self.user_prompt)
    }
}

/// Build the prompt profile for the given text and response mode.
pub fn build_prompt(text: &str, mode: ResponseMode) -> PromptPair {
    match mode {
        ResponseMode::Direct => PromptPair {
            system_instruction: DIRECT_SYSTEM_INSTRUCTION,
            user_prompt: format!(
                "Return ONLY the correct answer for this. Do not explain or add extra words.\n\n\"{text}\""
            ),
            max_output_tokens: DIRECT_MAX_OUTPUT_TOKENS,
            temperature: DIRECT_TEMPERATURE,
        },
        ResponseMode::Explain => PromptPair {
            system_instruction: EXPLAIN_SYSTEM_INSTRUCTION,
            user_prompt: format!(
                "Please explain this text in a clear and concise way:\n\n\"{text}\""
            ),
            max_output_tokens: EXPLAIN_MAX_OUTPUT_TOKENS,
            temperature: EXPLAIN_TEMPERATURE,
        },
    }
}
