//! The worker capability and its model-backed implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::profile::AgentProfile;
use crate::context::build_worker_prompt;
use crate::error::{Result, SwarmError};
use crate::providers::LlmProvider;
use crate::types::Message;

/// Anything that can take an instruction plus its bus context and answer.
#[async_trait]
pub trait Worker: Send + Sync {
    /// Role name this worker answers to
    fn role(&self) -> &str;

    /// Fixed instructions the worker runs under
    fn system_prompt(&self) -> &str;

    /// Produce a reply for `instruction`, given the messages visible to this role
    async fn respond(&self, instruction: &str, context: &[Message]) -> Result<String>;
}

/// Worker that answers through a language model
pub struct LlmWorker {
    profile: AgentProfile,
    provider: Arc<dyn LlmProvider>,
}

impl std::fmt::Debug for LlmWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmWorker")
            .field("role", &self.profile.role())
            .field("provider", &self.provider.provider_name())
            .field("model", &self.provider.model())
            .finish()
    }
}

impl LlmWorker {
    pub fn new(profile: AgentProfile, provider: Arc<dyn LlmProvider>) -> Self {
        Self { profile, provider }
    }

    pub fn profile(&self) -> &AgentProfile {
        &self.profile
    }
}

#[async_trait]
impl Worker for LlmWorker {
    fn role(&self) -> &str {
        self.profile.role()
    }

    fn system_prompt(&self) -> &str {
        self.profile.system_prompt()
    }

    async fn respond(&self, instruction: &str, context: &[Message]) -> Result<String> {
        let prompt = build_worker_prompt(instruction, context);
        debug!(
            "Worker '{}' calling {} ({})",
            self.role(),
            self.provider.provider_name(),
            self.provider.model()
        );

        let reply = self
            .provider
            .complete(self.system_prompt(), &prompt)
            .await
            .map_err(|e| SwarmError::external(self.role(), e))?;

        if reply.trim().is_empty() {
            return Err(SwarmError::external(
                self.role(),
                anyhow::anyhow!("model returned an empty response"),
            ));
        }
        Ok(reply)
    }
}
