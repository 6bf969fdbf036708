//! Agent runtime interface

use async_trait::async_trait;

use crate::chat::{AgentTurn, Message, ToolDefinition};
use crate::Result;

/// Interface to the external LLM agent runtime
///
/// One call corresponds to one model completion: the runtime sees the
/// conversation so far plus the advertised tools, and answers with either
/// final text or a set of tool calls. The react-style loop that feeds tool
/// results back lives in the agent crate, not here.
#[async_trait]
pub trait AgentRuntime: Send + Sync {
    /// Request one assistant turn for the given conversation
    async fn complete(&self, messages: &[Message], tools: &[ToolDefinition])
        -> Result<AgentTurn>;

    /// Model identifier for logging
    fn model_id(&self) -> &str;
}
