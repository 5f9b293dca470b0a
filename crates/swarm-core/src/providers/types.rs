//! Provider-agnostic interface to the language model

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Timeout applied to every HTTP request made by a provider
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Trait that all LLM providers implement.
///
/// A provider turns one system prompt plus one user prompt into generated
/// text. It does not retry; failures are returned to the caller as-is.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g. "anthropic", "google")
    fn provider_name(&self) -> &str;

    /// Model identifier (e.g. "claude-sonnet-4-5", "gemini-2.0-flash")
    fn model(&self) -> &str;

    /// Generate a reply to `prompt` under the given system prompt
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

/// Build the shared HTTP client, falling back to reqwest defaults if the
/// configured builder cannot be constructed.
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|e| {
            warn!("Failed to build HTTP client with timeout, using defaults: {}", e);
            Client::new()
        })
}

/// Mask a secret for Debug output: first 3 and last 4 chars, or "***"
pub(crate) fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() > 7 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        "***".to_string()
    }
}
