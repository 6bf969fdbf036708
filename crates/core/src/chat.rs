//! Chat message and tool-call types
//!
//! These are the wire-agnostic types the agent crate maps onto whatever
//! schema the external runtime speaks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single conversation message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Text content; empty for assistant turns that only carry tool calls
    #[serde(default)]
    pub content: String,
    /// Tool calls requested by an assistant turn
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolInvocation>,
    /// Correlates a tool-role message with the call it answers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: None,
        }
    }

    /// Assistant turn carrying tool calls (content may be empty)
    pub fn assistant_with_calls(content: impl Into<String>, calls: Vec<ToolInvocation>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            tool_calls: calls,
            tool_call_id: None,
        }
    }

    /// Tool result message answering `call_id`
    pub fn tool(call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: content.into(),
            tool_calls: Vec::new(),
            tool_call_id: Some(call_id.into()),
        }
    }
}

/// A tool call requested by the runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInvocation {
    /// Runtime-assigned call id, echoed back with the result
    pub id: String,
    /// Registered tool name
    pub name: String,
    /// JSON arguments object
    pub arguments: Value,
}

/// Tool definition advertised to the runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON Schema for the arguments object
    pub parameters: Value,
}

/// One assistant turn returned by the runtime
///
/// Either final text, or a set of tool calls to execute before asking again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentTurn {
    /// Final (or interim) text content, if any
    pub text: Option<String>,
    /// Tool calls to satisfy; empty means the turn is final
    #[serde(default)]
    pub tool_calls: Vec<ToolInvocation>,
}

impl AgentTurn {
    /// A turn that ends the loop with plain text
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }

    /// A turn requesting tool execution
    pub fn calls(calls: Vec<ToolInvocation>) -> Self {
        Self {
            text: None,
            tool_calls: calls,
        }
    }

    pub fn is_final(&self) -> bool {
        self.tool_calls.is_empty()
    }
}
