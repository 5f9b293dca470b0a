//! Shared types for swarm-core

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of the routing agent
pub const ROUTER: &str = "router";
/// Role of the code-writing worker
pub const CODER: &str = "coder";
/// Role of the review worker
pub const REVIEWER: &str = "reviewer";
/// Role of the research worker
pub const RESEARCHER: &str = "researcher";

/// Worker roles in registration order
pub const WORKER_ROLES: [&str; 3] = [CODER, REVIEWER, RESEARCHER];

/// What kind of message was put on the bus
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// Work handed from the router to a worker
    #[default]
    Task,
    /// A worker's reply to the router
    Result,
    /// Anything else (notes, progress)
    Info,
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Task => write!(f, "task"),
            Self::Result => write!(f, "result"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// A single entry in the message log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub from: String,
    pub to: String,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        kind: MessageKind,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            from: from.into(),
            to: to.into(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether `role` sent or receives this message
    pub fn involves(&self, role: &str) -> bool {
        self.from == role || self.to == role
    }
}

/// One unit of work the router hands to a worker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Delegation {
    pub agent: String,
    pub instruction: String,
}

impl Delegation {
    pub fn new(agent: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self {
            agent: agent.into(),
            instruction: instruction.into(),
        }
    }
}

/// Output of a single delegation, kept for synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerResult {
    pub agent: String,
    pub output: String,
}
