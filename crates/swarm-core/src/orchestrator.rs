//! Swarm orchestration
//!
//! Runs one task through the swarm: the router plans delegations, each
//! delegation is posted on the bus and handed to its worker, the reply is
//! posted back, and the collected results are synthesized into one answer.
//! Delegations run strictly one after another; the first failure aborts the
//! rest of the run.

use std::sync::Arc;
use tracing::{debug, info};

use crate::agents::{Worker, WorkerRegistry};
use crate::bus::MessageBus;
use crate::error::{Result, SwarmError};
use crate::providers::{LlmProvider, OfflineProvider};
use crate::router::{RouterAgent, RouterConfig};
use crate::synthesis::{ConcatSynthesizer, Synthesizer};
use crate::types::{MessageKind, WorkerResult};

/// Progress events go to `info` when the caller asked for verbose output
fn progress(verbose: bool, message: &str) {
    if verbose {
        info!("{}", message);
    } else {
        debug!("{}", message);
    }
}

/// Owns the router, the workers, the bus and the synthesis policy
pub struct SwarmOrchestrator {
    router: RouterAgent,
    workers: WorkerRegistry,
    bus: MessageBus,
    synthesizer: Box<dyn Synthesizer>,
    shut_down: bool,
}

impl std::fmt::Debug for SwarmOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwarmOrchestrator")
            .field("router", &self.router)
            .field("workers", &self.workers)
            .field("messages", &self.bus.len())
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

impl SwarmOrchestrator {
    /// Keyword router plus the three standard workers, all on `provider`
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self::with_router_config(provider, RouterConfig::default())
    }

    /// Like [`SwarmOrchestrator::new`], with the router's planning options
    pub fn with_router_config(provider: Arc<dyn LlmProvider>, config: RouterConfig) -> Self {
        let router = RouterAgent::with_provider(provider.clone(), config);
        let workers = WorkerRegistry::standard(provider);
        Self::from_parts(router, workers, MessageBus::new())
    }

    /// Swarm that never leaves the process
    pub fn offline() -> Self {
        Self::new(Arc::new(OfflineProvider::new()))
    }

    /// Assemble from explicit parts, e.g. a pre-seeded bus
    pub fn from_parts(router: RouterAgent, workers: WorkerRegistry, bus: MessageBus) -> Self {
        Self {
            router,
            workers,
            bus,
            synthesizer: Box::new(ConcatSynthesizer),
            shut_down: false,
        }
    }

    pub fn with_synthesizer(mut self, synthesizer: Box<dyn Synthesizer>) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    /// Run `task` through the swarm and return the synthesized answer.
    pub async fn execute(&mut self, task: &str, verbose: bool) -> Result<String> {
        let plan = self.router.delegate(task).await;
        progress(
            verbose,
            &format!(
                "Router delegated to: {}",
                plan.iter()
                    .map(|d| d.agent.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        );

        let router_role = self.router.role().to_string();
        let mut results = Vec::with_capacity(plan.len());

        for delegation in plan {
            let role = delegation.agent;
            self.bus.send(
                &router_role,
                &role,
                MessageKind::Task,
                delegation.instruction.clone(),
            );

            let worker: Arc<dyn Worker> = self
                .workers
                .get(&role)
                .cloned()
                .ok_or_else(|| SwarmError::UnknownWorker { role: role.clone() })?;

            progress(verbose, &format!("{} working...", role));
            let context = self.bus.get_context_for(&role);
            let reply = worker.respond(&delegation.instruction, &context).await?;

            self.bus
                .send(&role, &router_role, MessageKind::Result, reply.clone());
            progress(verbose, &format!("{} finished ({} chars)", role, reply.len()));

            results.push(WorkerResult {
                agent: role,
                output: reply,
            });
        }

        Ok(self.synthesizer.synthesize(task, &results))
    }

    /// Forget all messages; router and workers are kept
    pub fn reset(&mut self) {
        self.bus.clear();
        debug!("Swarm reset");
    }

    /// Final cleanup. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            debug!("Swarm already shut down");
            return;
        }
        info!(
            "Swarm shutting down ({} messages exchanged, workers: {})",
            self.bus.len(),
            self.workers.roles().join(", ")
        );
        self.bus.clear();
        self.shut_down = true;
    }

    pub fn router(&self) -> &RouterAgent {
        &self.router
    }

    pub fn workers(&self) -> &WorkerRegistry {
        &self.workers
    }

    pub fn worker(&self, role: &str) -> Option<&Arc<dyn Worker>> {
        self.workers.get(role)
    }

    pub fn message_bus(&self) -> &MessageBus {
        &self.bus
    }
}

impl Default for SwarmOrchestrator {
    fn default() -> Self {
        Self::offline()
    }
}
