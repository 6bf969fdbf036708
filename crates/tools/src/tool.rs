//! Tool trait and schema types
//!
//! Tools are the functions the agent runtime can call. Each tool declares a
//! JSON-schema-shaped input description that the agent serializes into the
//! runtime request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default timeout for tool execution (30 seconds)
pub const DEFAULT_TOOL_TIMEOUT_SECS: u64 = 30;

/// Tool execution errors
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("tool not found: {0}")]
    NotFound(String),

    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("tool {name} timed out after {seconds}s")]
    Timeout { name: String, seconds: u64 },

    #[error("tool execution failed: {0}")]
    Execution(String),
}

impl ToolError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    pub fn timeout(name: impl Into<String>, seconds: u64) -> Self {
        Self::Timeout {
            name: name.into(),
            seconds,
        }
    }

    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}

/// Tool execution output
///
/// `text` is what goes back into the conversation; `data` carries the
/// structured form when the tool produced one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            data: None,
        }
    }

    pub fn json(value: Value) -> Self {
        Self {
            text: serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
            data: Some(value),
        }
    }
}

/// Schema for a single tool parameter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

impl PropertySchema {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            kind: "string".to_string(),
            description: description.into(),
        }
    }
}

/// JSON-schema-shaped input description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: BTreeMap<String, PropertySchema>,
    pub required: Vec<String>,
}

impl InputSchema {
    pub fn object() -> Self {
        Self {
            kind: "object".to_string(),
            properties: BTreeMap::new(),
            required: Vec::new(),
        }
    }

    pub fn property(mut self, name: &str, schema: PropertySchema, required: bool) -> Self {
        self.properties.insert(name.to_string(), schema);
        if required {
            self.required.push(name.to_string());
        }
        self
    }
}

/// Complete tool schema as presented to the agent runtime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

/// A callable tool
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name
    fn name(&self) -> &str;

    /// One-line description for the runtime
    fn description(&self) -> &str;

    /// Input schema
    fn schema(&self) -> ToolSchema;

    /// Validate input before execution
    ///
    /// Default checks that every required property is present.
    fn validate(&self, input: &Value) -> Result<(), ToolError> {
        let schema = self.schema();
        for required in &schema.input_schema.required {
            if input.get(required).is_none() {
                return Err(ToolError::invalid_params(format!(
                    "{} is required",
                    required
                )));
            }
        }
        Ok(())
    }

    /// Per-tool execution timeout
    fn timeout_secs(&self) -> u64 {
        DEFAULT_TOOL_TIMEOUT_SECS
    }

    /// Execute the tool
    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the input back"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema {
                name: self.name().to_string(),
                description: self.description().to_string(),
                input_schema: InputSchema::object().property(
                    "text",
                    PropertySchema::string("Text to echo"),
                    true,
                ),
            }
        }

        async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
            let text = input.get("text").and_then(|v| v.as_str()).unwrap_or("");
            Ok(ToolOutput::text(text))
        }
    }

    #[test]
    fn test_default_validate_checks_required() {
        let tool = EchoTool;
        assert!(tool.validate(&serde_json::json!({"text": "hi"})).is_ok());
        assert!(tool.validate(&serde_json::json!({})).is_err());
    }

    #[test]
    fn test_schema_serializes_as_json_schema() {
        let schema = EchoTool.schema();
        let value = serde_json::to_value(&schema.input_schema).unwrap();
        assert_eq!(value["type"], "object");
        assert_eq!(value["properties"]["text"]["type"], "string");
        assert_eq!(value["required"][0], "text");
    }
}
