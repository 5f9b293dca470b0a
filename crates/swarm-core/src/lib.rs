//! swarm-core - Router/worker task delegation
//!
//! This crate provides:
//! - An append-only message bus shared by the router and its workers
//! - A router that turns a task into an ordered delegation plan
//! - Coder, reviewer and researcher workers backed by a language model
//! - Language model providers (Anthropic, Gemini, Ollama, offline)
//! - The orchestrator that runs a task end to end and synthesizes the results

pub mod agents;
pub mod bus;
pub mod context;
pub mod error;
pub mod orchestrator;
pub mod providers;
pub mod router;
pub mod synthesis;
pub mod types;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use agents::{AgentProfile, LlmWorker, Worker, WorkerRegistry};
pub use bus::MessageBus;
pub use error::{Result, SwarmError};
pub use orchestrator::SwarmOrchestrator;
pub use providers::{
    AnthropicProvider, GoogleProvider, LlmProvider, OfflineProvider, OllamaProvider,
};
pub use router::{RouterAgent, RouterConfig};
pub use synthesis::{ConcatSynthesizer, Synthesizer};
pub use types::{Delegation, Message, MessageKind, WorkerResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_exports() {
        let _ = std::mem::size_of::<SwarmOrchestrator>();
        let _ = std::mem::size_of::<MessageBus>();
        let _ = std::mem::size_of::<RouterAgent>();
        let _ = std::mem::size_of::<Message>();
        let _ = std::mem::size_of::<Delegation>();
    }
}
