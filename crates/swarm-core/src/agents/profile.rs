//! Agent profile: a role name plus the fixed instructions that go with it

use serde::{Deserialize, Serialize};

use super::prompts::{CODER_PROMPT, RESEARCHER_PROMPT, REVIEWER_PROMPT, ROUTER_PROMPT};
use crate::types::{CODER, RESEARCHER, REVIEWER, ROUTER};

/// Identity of an agent: its role and the system prompt it runs with.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    role: String,
    system_prompt: String,
}

impl AgentProfile {
    pub fn new(role: impl Into<String>, system_prompt: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            system_prompt: system_prompt.into(),
        }
    }

    pub fn router() -> Self {
        Self::new(ROUTER, ROUTER_PROMPT)
    }

    pub fn coder() -> Self {
        Self::new(CODER, CODER_PROMPT)
    }

    pub fn reviewer() -> Self {
        Self::new(REVIEWER, REVIEWER_PROMPT)
    }

    pub fn researcher() -> Self {
        Self::new(RESEARCHER, RESEARCHER_PROMPT)
    }

    /// Built-in profile for a role name, if there is one
    pub fn for_role(role: &str) -> Option<Self> {
        match role {
            ROUTER => Some(Self::router()),
            CODER => Some(Self::coder()),
            REVIEWER => Some(Self::reviewer()),
            RESEARCHER => Some(Self::researcher()),
            _ => None,
        }
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_profile() {
        let profile = AgentProfile::router();
        assert_eq!(profile.role(), "router");
        assert!(!profile.system_prompt().is_empty());
        assert!(profile.system_prompt().contains("JSON"));
    }

    #[test]
    fn test_coder_profile() {
        let profile = AgentProfile::coder();
        assert_eq!(profile.role(), "coder");
        assert!(profile.system_prompt().to_lowercase().contains("code"));
    }

    #[test]
    fn test_reviewer_profile() {
        let profile = AgentProfile::reviewer();
        assert_eq!(profile.role(), "reviewer");
        let prompt = profile.system_prompt().to_lowercase();
        assert!(prompt.contains("review") || prompt.contains("quality"));
    }

    #[test]
    fn test_researcher_profile() {
        let profile = AgentProfile::researcher();
        assert_eq!(profile.role(), "researcher");
        let prompt = profile.system_prompt().to_lowercase();
        assert!(prompt.contains("research") || prompt.contains("information"));
    }

    #[test]
    fn test_for_role() {
        assert_eq!(AgentProfile::for_role("coder"), Some(AgentProfile::coder()));
        assert_eq!(AgentProfile::for_role("router"), Some(AgentProfile::router()));
        assert!(AgentProfile::for_role("tester").is_none());
    }

    #[test]
    fn test_custom_profile() {
        let profile = AgentProfile::new("tester", "You write tests.");
        assert_eq!(profile.role(), "tester");
        assert_eq!(profile.system_prompt(), "You write tests.");
    }
}
