//! Error types for swarm orchestration

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwarmError {
    #[error("No worker registered for role '{role}'")]
    UnknownWorker { role: String },

    #[error("Worker '{role}' failed: {source:#}")]
    ExternalCall {
        role: String,
        #[source]
        source: anyhow::Error,
    },
}

impl SwarmError {
    pub fn external(role: impl Into<String>, source: anyhow::Error) -> Self {
        Self::ExternalCall {
            role: role.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SwarmError>;
