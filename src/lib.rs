//! # explainer-core
//!
//! Provider-agnostic text explanation engine. Takes a block of selected text
//! plus a response mode, dispatches to one of two interchangeable language-model
//! providers (OpenAI-style chat completion or Gemini-style generate-content),
//! and returns a single normalized string or a classified error, regardless of
//! which provider's wire format, authentication scheme, or failure format was
//! involved.
//!
//! ## Overview
//!
//! The surrounding UI layer (context menu, result panel, settings form) obtains
//! the selected text and the three persisted configuration values, then calls
//! [`Explainer::explain`]. Everything provider-specific (request shape, auth
//! slot, response path, status-code semantics) lives behind the
//! [`drivers::ProviderDriver`] trait, one implementation per provider.
//!
//! ## Core Philosophy
//!
//! - **Closed provider set**: providers are an exhaustively matched enum, not
//!   strings; a misnamed provider is caught at the string-parsing boundary.
//! - **One normalized outcome**: success is always a trimmed non-empty string;
//!   every failure is one kind of [`Error`], surfaced verbatim to the caller.
//! - **Single attempt**: no retries inside the core; the user retriggers the
//!   action, and [`Error::retryable`] tells the caller which failures are
//!   worth retrying.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use explainer_core::{ExplainRequest, Explainer, Provider, ResponseMode};
//!
//! #[tokio::main]
//! async fn main() -> explainer_core::Result<()> {
//!     let explainer = Explainer::new()?;
//!
//!     let request = ExplainRequest::new(
//!         "the borrow checker",
//!         "sk-your-api-key",
//!         Provider::OpenAi,
//!         ResponseMode::Explain,
//!     );
//!
//!     let explanation = explainer.explain(&request).await?;
//!     println!("{explanation}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`explainer`] | The explanation service, the single entry point |
//! | [`drivers`] | Provider-specific request building and response parsing |
//! | [`prompt`] | Prompt construction per response mode |
//! | [`provider`] | The closed set of supported providers |
//! | [`transport`] | HTTP execution and network-failure classification |
//! | [`config`] | Environment-backed resolution of the persisted settings |
//! | [`panel`] | Result panel modeled as an explicit state machine |

pub mod config;
pub mod drivers;
pub mod explainer;
pub mod panel;
pub mod prompt;
pub mod provider;
pub mod transport;

// Re-export main types for convenience
pub use config::ExplainerConfig;
pub use explainer::{ExplainRequest, Explainer, ExplainerBuilder};
pub use panel::{Panel, PanelState};
pub use prompt::{build_prompt, PromptPair, ResponseMode};
pub use provider::Provider;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
