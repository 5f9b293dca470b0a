//! Ollama provider using the OpenAI-compatible chat endpoint

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{LlmProvider, http_client};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Ollama API client using OpenAI-compatible format
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl std::fmt::Debug for OllamaProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OllamaProvider")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl OllamaProvider {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            max_tokens: 4096,
        }
    }

    /// Set max tokens for responses
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn request_body(&self, system: &str, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Some(system.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: Some(prompt.to_string()),
                },
            ],
        }
    }

    fn extract_text(resp: ChatResponse) -> Result<String> {
        let choice = resp
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("No choices in response"))?;

        match choice.message.content {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(anyhow!(
                "Ollama response contained no text (finish_reason: {:?})",
                choice.finish_reason
            )),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = self.request_body(system, prompt);

        debug!(
            "Sending request to Ollama API with {} messages",
            body.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Ollama API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        let api_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Ollama API response")?;

        debug!(
            "Received response with finish_reason: {:?}",
            api_response.choices.first().map(|c| &c.finish_reason)
        );

        Self::extract_text(api_response)
    }
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ChatMessage,
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_provider_creation() {
        let provider = OllamaProvider::new(DEFAULT_BASE_URL.to_string(), DEFAULT_MODEL.to_string());
        assert_eq!(provider.model(), "llama3.2");
        assert_eq!(provider.provider_name(), "ollama");
        assert_eq!(provider.max_tokens, 4096);
    }

    #[test]
    fn test_request_body_puts_system_first() {
        let provider = OllamaProvider::new("http://localhost:11434/".to_string(), "m".to_string());
        let body = serde_json::to_value(provider.request_body("sys", "user text")).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(provider.base_url, "http://localhost:11434");
    }

    #[test]
    fn test_extract_text() {
        let resp: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "fn main() {}"}, "finish_reason": "stop"}]
        }))
        .unwrap();
        assert_eq!(OllamaProvider::extract_text(resp).unwrap(), "fn main() {}");
    }

    #[test]
    fn test_extract_text_null_content() {
        let resp: ChatResponse = serde_json::from_value(serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": null}, "finish_reason": "length"}]
        }))
        .unwrap();
        assert!(OllamaProvider::extract_text(resp).is_err());

        let empty: ChatResponse = serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
        assert!(OllamaProvider::extract_text(empty).is_err());
    }
}
