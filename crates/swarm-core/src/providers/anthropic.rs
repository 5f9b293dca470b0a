//! Anthropic Claude provider

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{LlmProvider, http_client, mask_key};

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Anthropic Claude provider
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    max_tokens: u32,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("api_key", &mask_key(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl AnthropicProvider {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: http_client(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            max_tokens: 4096,
        }
    }

    /// Set max tokens for responses
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set a custom base URL (e.g. for proxies or regional endpoints)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn request_body(&self, system: &str, prompt: &str) -> AnthropicRequest {
        AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: system.to_string(),
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }

    /// Join the text blocks of a response
    fn extract_text(resp: AnthropicApiResponse) -> Result<String> {
        let text = resp
            .content
            .into_iter()
            .filter_map(|b| match b {
                AnthropicBlock::Text { text } => Some(text),
                AnthropicBlock::Other => None,
            })
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            return Err(anyhow!(
                "Anthropic response contained no text (stop_reason: {:?})",
                resp.stop_reason
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl LlmProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.request_body(system, prompt);

        debug!(
            "Anthropic request: model={}, prompt={} chars",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .context("Failed to send request to Anthropic API")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!(
                "Anthropic API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        let api_response: AnthropicApiResponse = response
            .json()
            .await
            .context("Failed to parse Anthropic API response")?;

        debug!(
            "Anthropic response: blocks={}, stop_reason={:?}",
            api_response.content.len(),
            api_response.stop_reason
        );

        Self::extract_text(api_response)
    }
}

// ── Anthropic wire types ──

#[derive(Debug, Clone, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum AnthropicBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
struct AnthropicApiResponse {
    content: Vec<AnthropicBlock>,
    stop_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let provider = AnthropicProvider::new("test-key".to_string(), None);
        assert_eq!(provider.model(), DEFAULT_MODEL);
        assert_eq!(provider.provider_name(), "anthropic");
        assert_eq!(provider.max_tokens, 4096);
        assert_eq!(provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let provider = AnthropicProvider::new("k".to_string(), None)
            .with_base_url("http://localhost:8080/".to_string())
            .with_max_tokens(512);
        assert_eq!(provider.base_url, "http://localhost:8080");
        assert_eq!(provider.max_tokens, 512);
    }

    #[test]
    fn test_request_body_shape() {
        let provider = AnthropicProvider::new("k".to_string(), Some("claude-x".to_string()));
        let body = serde_json::to_value(provider.request_body("be terse", "hello")).unwrap();
        assert_eq!(body["model"], "claude-x");
        assert_eq!(body["system"], "be terse");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello");
    }

    #[test]
    fn test_extract_text_joins_blocks() {
        let resp: AnthropicApiResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_1",
            "content": [
                {"type": "text", "text": "Hello"},
                {"type": "tool_use", "id": "t1", "name": "x", "input": {}},
                {"type": "text", "text": "World"}
            ],
            "stop_reason": "end_turn",
            "usage": {"input_tokens": 1, "output_tokens": 2}
        }))
        .unwrap();
        assert_eq!(AnthropicProvider::extract_text(resp).unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_extract_text_empty_is_error() {
        let resp: AnthropicApiResponse = serde_json::from_value(serde_json::json!({
            "content": [],
            "stop_reason": "max_tokens"
        }))
        .unwrap();
        let err = AnthropicProvider::extract_text(resp).unwrap_err();
        assert!(err.to_string().contains("no text"));
    }

    #[test]
    fn test_anthropic_provider_debug_hides_key() {
        let provider = AnthropicProvider::new("sk-ant-1234567890abcdef".to_string(), None);
        let debug = format!("{:?}", provider);
        assert!(debug.contains("sk-...cdef"));
        assert!(!debug.contains("sk-ant-1234567890abcdef"));
    }
}
