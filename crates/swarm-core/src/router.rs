//! Task routing: turns a free-text task into an ordered delegation plan
//!
//! The default policy is an ordered list of keyword rules checked against the
//! lower-cased task. Rules are independent, so one task can reach several
//! workers. A final fallback rule sends anything unmatched to the coder.
//! Optionally the router can ask a model for a plan first, falling back to
//! the keyword rules whenever that fails.

use std::sync::Arc;
use tracing::debug;

use crate::agents::AgentProfile;
use crate::providers::LlmProvider;
use crate::types::{CODER, Delegation, RESEARCHER, REVIEWER, WORKER_ROLES};

/// When a rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Case-insensitive substring match on any of the keywords
    AnyKeyword(&'static [&'static str]),
    /// Always true, but only consulted while the plan is still empty
    Fallback,
}

/// One routing rule: a trigger, a target role and an instruction template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegationRule {
    pub target: &'static str,
    pub trigger: Trigger,
    /// Prefix placed in front of the task text
    pub lead: &'static str,
}

impl DelegationRule {
    /// Whether this rule fires for an already lower-cased task
    pub fn matches(&self, lower_task: &str, plan_so_far: &[Delegation]) -> bool {
        match self.trigger {
            Trigger::AnyKeyword(keywords) => keywords.iter().any(|k| lower_task.contains(k)),
            Trigger::Fallback => plan_so_far.is_empty(),
        }
    }

    pub fn delegation(&self, task: &str) -> Delegation {
        let task = task.trim();
        let body = if task.is_empty() {
            "(no task description given)"
        } else {
            task
        };
        Delegation::new(self.target, format!("{}{}", self.lead, body))
    }
}

/// Routing rules in evaluation order
pub const DELEGATION_RULES: [DelegationRule; 4] = [
    DelegationRule {
        target: CODER,
        trigger: Trigger::AnyKeyword(&[
            "build",
            "write",
            "implement",
            "create",
            "develop",
            "refactor",
        ]),
        lead: "Implement the following: ",
    },
    DelegationRule {
        target: REVIEWER,
        trigger: Trigger::AnyKeyword(&["review", "security", "audit", "check quality", "quality"]),
        lead: "Review the following for correctness, security and quality: ",
    },
    DelegationRule {
        target: RESEARCHER,
        trigger: Trigger::AnyKeyword(&["research", "find out", "look up", "investigate", "explain"]),
        lead: "Research the following and summarise what you find: ",
    },
    DelegationRule {
        target: CODER,
        trigger: Trigger::Fallback,
        lead: "Help with the following: ",
    },
];

/// Configuration for the router
#[derive(Debug, Clone, Default)]
pub struct RouterConfig {
    /// Ask the model for a plan before using the keyword rules
    pub use_llm_planning: bool,
}

/// The agent that decides which workers handle a task
pub struct RouterAgent {
    profile: AgentProfile,
    config: RouterConfig,
    provider: Option<Arc<dyn LlmProvider>>,
}

impl std::fmt::Debug for RouterAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterAgent")
            .field("role", &self.profile.role())
            .field("config", &self.config)
            .field(
                "provider",
                &self.provider.as_ref().map(|p| p.provider_name().to_string()),
            )
            .finish()
    }
}

impl Default for RouterAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterAgent {
    /// Keyword-only router
    pub fn new() -> Self {
        Self {
            profile: AgentProfile::router(),
            config: RouterConfig::default(),
            provider: None,
        }
    }

    /// Router that may consult `provider` for a plan, per `config`
    pub fn with_provider(provider: Arc<dyn LlmProvider>, config: RouterConfig) -> Self {
        Self {
            profile: AgentProfile::router(),
            config,
            provider: Some(provider),
        }
    }

    pub fn role(&self) -> &str {
        self.profile.role()
    }

    pub fn system_prompt(&self) -> &str {
        self.profile.system_prompt()
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Produce the delegation plan for `task`. Never empty, never fails.
    pub async fn delegate(&self, task: &str) -> Vec<Delegation> {
        if self.config.use_llm_planning {
            if let Some(provider) = &self.provider {
                match provider.complete(self.system_prompt(), task).await {
                    Ok(reply) => match parse_plan(&reply) {
                        Some(plan) => {
                            debug!("Router: model planned {} delegations", plan.len());
                            return plan;
                        }
                        None => debug!("Router: model plan unusable, using keyword rules"),
                    },
                    Err(e) => debug!("Router: model planning failed, using keyword rules: {}", e),
                }
            }
        }

        let plan = Self::simple_delegate(task);
        debug!(
            "Router: keyword rules chose [{}]",
            plan.iter()
                .map(|d| d.agent.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
        plan
    }

    /// Keyword-rule policy: coder, then reviewer, then researcher, each
    /// included if it matched; a single coder delegation if none did.
    pub fn simple_delegate(task: &str) -> Vec<Delegation> {
        let lower = task.to_lowercase();
        let mut plan = Vec::new();
        for rule in &DELEGATION_RULES {
            if rule.matches(&lower, &plan) {
                plan.push(rule.delegation(task));
            }
        }
        plan
    }
}

/// Parse a model-produced plan: a JSON array of `{agent, instruction}`,
/// possibly wrapped in prose or a code fence. Entries for unknown roles or
/// with blank instructions are dropped. `None` if nothing usable remains.
pub fn parse_plan(reply: &str) -> Option<Vec<Delegation>> {
    let start = reply.find('[')?;
    let end = reply.rfind(']')?;
    if end <= start {
        return None;
    }

    let parsed: Vec<Delegation> = serde_json::from_str(&reply[start..=end]).ok()?;
    let plan: Vec<Delegation> = parsed
        .into_iter()
        .map(|d| Delegation::new(d.agent.trim().to_lowercase(), d.instruction.trim()))
        .filter(|d| WORKER_ROLES.contains(&d.agent.as_str()) && !d.instruction.is_empty())
        .collect();

    if plan.is_empty() { None } else { Some(plan) }
}
