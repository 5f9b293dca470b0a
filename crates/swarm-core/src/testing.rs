//! Test doubles for the model boundary

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::providers::LlmProvider;

/// One recorded `complete` call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system: String,
    pub prompt: String,
}

/// Returns canned replies in order, then echoes the system prompt's first line
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedProvider {
    pub fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(String::from).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn provider_name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted"
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });
        let next = self.replies.lock().unwrap().pop_front();
        Ok(next.unwrap_or_else(|| system.lines().next().unwrap_or("ok").to_string()))
    }
}

/// Always fails, like an unreachable endpoint
pub struct FailingProvider;

#[async_trait]
impl LlmProvider for FailingProvider {
    fn provider_name(&self) -> &str {
        "failing"
    }

    fn model(&self) -> &str {
        "failing"
    }

    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String> {
        Err(anyhow!("connection refused"))
    }
}
