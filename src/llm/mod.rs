//! Language-model provider seam.
//!
//! The pipeline treats generation as an opaque capability: given a prompt
//! string and generation parameters, return a completion or fail. Provider
//! failures never abort a request; the orchestrator substitutes a
//! placeholder reply.

pub mod openai;
pub mod scripted;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use openai::OpenAiCompatProvider;
pub use scripted::ScriptedProvider;

/// Generation parameters for one provider call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Token accounting, when the provider reports it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// A successful completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

/// Ways a provider call can fail. All of them are recovered locally.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Network/TLS/connect failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status other than quota exhaustion.
    #[error("Provider returned status {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limit or quota exhaustion (HTTP 429).
    #[error("Provider quota exhausted: {0}")]
    Quota(String),

    /// The configured deadline elapsed; treated identically to failure.
    #[error("Provider call exceeded the {0:?} deadline")]
    DeadlineExceeded(Duration),

    /// The provider answered but the body had no usable completion.
    #[error("Malformed provider response: {0}")]
    Malformed(String),
}

/// The generation capability the orchestrator invokes.
#[async_trait]
pub trait LanguageModelProvider: Send + Sync + fmt::Debug {
    /// Generate a completion for one prompt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Completion, ProviderError>;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}
