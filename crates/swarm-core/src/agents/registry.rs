//! Worker registry: maps role names to worker instances

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use super::profile::AgentProfile;
use super::worker::{LlmWorker, Worker};
use crate::providers::LlmProvider;
use crate::types::WORKER_ROLES;

/// Fixed set of workers the orchestrator can delegate to
#[derive(Clone, Default)]
pub struct WorkerRegistry {
    workers: BTreeMap<String, Arc<dyn Worker>>,
}

impl std::fmt::Debug for WorkerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkerRegistry")
            .field("roles", &self.roles())
            .finish()
    }
}

impl WorkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coder, reviewer and researcher, all backed by the same provider
    pub fn standard(provider: Arc<dyn LlmProvider>) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LlmWorker::new(
            AgentProfile::coder(),
            provider.clone(),
        )));
        registry.register(Arc::new(LlmWorker::new(
            AgentProfile::reviewer(),
            provider.clone(),
        )));
        registry.register(Arc::new(LlmWorker::new(AgentProfile::researcher(), provider)));
        debug_assert_eq!(registry.len(), WORKER_ROLES.len());
        registry
    }

    /// Add a worker under its own role, replacing any previous one
    pub fn register(&mut self, worker: Arc<dyn Worker>) {
        debug!("Registering worker: {}", worker.role());
        self.workers.insert(worker.role().to_string(), worker);
    }

    pub fn get(&self, role: &str) -> Option<&Arc<dyn Worker>> {
        self.workers.get(role)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.workers.contains_key(role)
    }

    /// Registered role names, sorted
    pub fn roles(&self) -> Vec<&str> {
        self.workers.keys().map(|k| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::OfflineProvider;

    #[test]
    fn test_standard_registry() {
        let registry = WorkerRegistry::standard(Arc::new(OfflineProvider::new()));
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("coder"));
        assert!(registry.contains("reviewer"));
        assert!(registry.contains("researcher"));
        assert!(!registry.contains("router"));
        assert_eq!(registry.roles(), vec!["coder", "researcher", "reviewer"]);
    }

    #[test]
    fn test_get_returns_matching_role() {
        let registry = WorkerRegistry::standard(Arc::new(OfflineProvider::new()));
        let worker = registry.get("reviewer").unwrap();
        assert_eq!(worker.role(), "reviewer");
        assert!(registry.get("tester").is_none());
    }

    #[test]
    fn test_register_replaces_same_role() {
        let provider: Arc<dyn LlmProvider> = Arc::new(OfflineProvider::new());
        let mut registry = WorkerRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(LlmWorker::new(AgentProfile::coder(), provider.clone())));
        registry.register(Arc::new(LlmWorker::new(
            AgentProfile::new("coder", "You write Rust only."),
            provider,
        )));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("coder").unwrap().system_prompt(),
            "You write Rust only."
        );
    }
}
