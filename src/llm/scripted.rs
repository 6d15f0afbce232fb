//! Scripted provider for tests and offline development.
//!
//! Pops queued outcomes in order, falling back to a fixed default reply
//! when the queue runs dry. Records every prompt it receives so tests can
//! assert on what was (or was not) sent to the provider.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::llm::{Completion, GenerationParams, LanguageModelProvider, ProviderError};

/// One scripted outcome.
#[derive(Debug)]
pub enum ScriptedReply {
    Text(String),
    Fail(ProviderError),
}

/// Deterministic provider driven by a queue of scripted outcomes.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    queue: Mutex<VecDeque<ScriptedReply>>,
    prompts: Mutex<Vec<String>>,
    default_reply: String,
}

impl ScriptedProvider {
    /// Provider that always answers with `default_reply`.
    pub fn new(default_reply: impl Into<String>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            default_reply: default_reply.into(),
        }
    }

    /// Queue a successful reply.
    pub fn push_text(&self, text: impl Into<String>) {
        self.queue.lock().push_back(ScriptedReply::Text(text.into()));
    }

    /// Queue a failure.
    pub fn push_failure(&self, error: ProviderError) {
        self.queue.lock().push_back(ScriptedReply::Fail(error));
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }

    /// Number of generate calls made.
    pub fn call_count(&self) -> usize {
        self.prompts.lock().len()
    }
}

#[async_trait]
impl LanguageModelProvider for ScriptedProvider {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<Completion, ProviderError> {
        self.prompts.lock().push(prompt.to_string());
        match self.queue.lock().pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(Completion { text, usage: None }),
            Some(ScriptedReply::Fail(error)) => Err(error),
            None => Ok(Completion {
                text: self.default_reply.clone(),
                usage: None,
            }),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
