//! Agents: role profiles, the worker capability and the worker registry
//!
//! Every agent is a role name plus a fixed system prompt. Workers share one
//! interface, [`Worker::respond`], and differ only in their profile.

pub mod profile;
pub mod prompts;
pub mod registry;
pub mod worker;

pub use profile::AgentProfile;
pub use registry::WorkerRegistry;
pub use worker::{LlmWorker, Worker};
