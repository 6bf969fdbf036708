//! Tool registry
//!
//! Manages tool registration, discovery, and execution.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::tool::{Tool, ToolError, ToolOutput, ToolSchema};

/// Tool executor trait
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool by name
    async fn execute(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError>;

    /// List available tools
    fn list_tools(&self) -> Vec<ToolSchema>;

    /// Get tool schema by name
    fn get_tool(&self, name: &str) -> Option<ToolSchema>;
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Check if tool exists
    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Get number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Get all tool names
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutor for ToolRegistry {
    /// Execute a tool with timeout protection
    ///
    /// Arguments are validated against the tool's schema first, then the
    /// call runs under the tool's own deadline so a stuck tool cannot block
    /// the agent loop.
    async fn execute(&self, name: &str, arguments: Value) -> Result<ToolOutput, ToolError> {
        let tool = self.tools.get(name).ok_or_else(|| {
            tracing::warn!(tool = name, "Requested tool is not registered");
            ToolError::not_found(name)
        })?;

        tool.validate(&arguments)?;

        let deadline = Duration::from_secs(tool.timeout_secs());
        tracing::debug!(tool = name, deadline_secs = deadline.as_secs(), "Running tool");

        tokio::time::timeout(deadline, tool.execute(arguments))
            .await
            .unwrap_or_else(|_| Err(ToolError::timeout(name, deadline.as_secs())))
    }

    fn list_tools(&self) -> Vec<ToolSchema> {
        self.tools.values().map(|t| t.schema()).collect()
    }

    fn get_tool(&self, name: &str) -> Option<ToolSchema> {
        self.tools.get(name).map(|t| t.schema())
    }
}

/// Create the registry for the chat service
pub fn create_concierge_registry(
    hotel_data: Arc<concierge_catalog::HotelData>,
) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(crate::FindExperienceTool::new());
    registry.register(crate::HotelInfoTool::new(hotel_data));

    tracing::info!(tools = registry.len(), "Created concierge tool registry");

    registry
}

/// Create the registry for the voice service
///
/// The voice concierge only answers experience questions; it carries no
/// hotel document.
pub fn create_voice_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(crate::FindExperienceTool::new());
    registry
}
