//! Network-free provider used when no model is configured

use anyhow::Result;
use async_trait::async_trait;

use super::types::LlmProvider;

const PREVIEW_CHARS: usize = 200;

/// Deterministic stand-in for a real model.
///
/// Replies with the first line of the system prompt followed by a preview
/// of the prompt it was given. The reply is never empty.
#[derive(Debug, Clone, Default)]
pub struct OfflineProvider;

impl OfflineProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LlmProvider for OfflineProvider {
    fn provider_name(&self) -> &str {
        "offline"
    }

    fn model(&self) -> &str {
        "offline"
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        let persona = system
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .unwrap_or("Offline model");

        let preview: String = prompt.trim().chars().take(PREVIEW_CHARS).collect();
        let mut reply = format!("{}\n\n(offline response, no model configured)", persona);
        if !preview.is_empty() {
            reply.push_str("\n\n");
            reply.push_str(&preview);
            if prompt.trim().chars().count() > PREVIEW_CHARS {
                reply.push_str("...");
            }
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_reply_uses_persona_and_prompt() {
        let provider = OfflineProvider::new();
        let reply = provider
            .complete("\nYou are a coder.\nWrite code.", "Build a calculator")
            .await
            .unwrap();
        assert!(reply.starts_with("You are a coder."));
        assert!(reply.contains("Build a calculator"));
    }

    #[tokio::test]
    async fn test_offline_reply_never_empty() {
        let reply = OfflineProvider::new().complete("", "").await.unwrap();
        assert!(!reply.trim().is_empty());
    }

    #[tokio::test]
    async fn test_offline_reply_truncates_long_prompt() {
        let prompt = "x".repeat(1000);
        let reply = OfflineProvider::new().complete("sys", &prompt).await.unwrap();
        assert!(reply.ends_with("..."));
        assert!(reply.len() < 400);
    }
}
