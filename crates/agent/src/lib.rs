//! Concierge agent
//!
//! Ties the external chat-completions runtime to the local tool registry.

pub mod agent;
pub mod openai;

pub use agent::{AgentError, ConciergeAgent};
pub use openai::OpenAiRuntime;
