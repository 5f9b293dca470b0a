//! LLM provider layer
//!
//! Every worker talks to its model through the [`LlmProvider`] trait. The
//! Anthropic, Google Gemini and Ollama clients speak HTTP; [`OfflineProvider`]
//! answers locally so the swarm runs without credentials.

pub mod anthropic;
pub mod google;
pub mod offline;
pub mod ollama;
pub mod types;

pub use anthropic::AnthropicProvider;
pub use google::GoogleProvider;
pub use offline::OfflineProvider;
pub use ollama::OllamaProvider;
pub use types::LlmProvider;
