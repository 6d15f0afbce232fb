//! OpenAI-compatible chat-completions client.
//!
//! Works against any endpoint speaking the `/chat/completions` dialect
//! (OpenAI, Azure-compatible proxies, local runtimes). The base URL and
//! model come from [`crate::utilities::config::ProviderConfig`]; the API key
//! from `OPENAI_API_KEY` unless supplied explicitly.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::llm::{Completion, GenerationParams, LanguageModelProvider, ProviderError, TokenUsage};
use crate::utilities::config::ProviderConfig;

/// Chat-completions provider over `reqwest`.
#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

impl OpenAiCompatProvider {
    /// Build a provider from configuration, reading `OPENAI_API_KEY` for
    /// the key.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            std::env::var("OPENAI_API_KEY").ok(),
        )
    }

    pub fn new(base_url: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            api_key,
        }
    }
}

#[async_trait]
impl LanguageModelProvider for OpenAiCompatProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<Completion, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let mut request = self.client.post(&url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.as_u16() == 429 {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Quota(message));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(e.to_string()))?;

        let text = parsed
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| ProviderError::Malformed("empty completion".to_string()))?;

        Ok(Completion {
            text,
            usage: parsed.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            }),
        })
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let provider = OpenAiCompatProvider::new(
            "http://localhost:11434/v1/".to_string(),
            "local".to_string(),
            None,
        );
        assert_eq!(provider.base_url, "http://localhost:11434/v1");
        assert_eq!(provider.name(), "local");
    }

    #[test]
    fn test_chat_response_parsing() {
        let raw = r#"{
            "choices": [{"message": {"role": "assistant", "content": "hello"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
        assert_eq!(parsed.usage.unwrap().completion_tokens, 3);
    }
}
