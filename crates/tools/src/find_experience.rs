//! Experience finder tool

use async_trait::async_trait;
use serde_json::Value;

use crate::tool::{InputSchema, PropertySchema, Tool, ToolError, ToolOutput, ToolSchema};

/// Experience finder tool
///
/// Looks up a guest activity in the experience catalog and returns either a
/// formatted description or the fixed not-found reply. Never fails on a
/// miss; the reply string is the answer.
pub struct FindExperienceTool;

impl FindExperienceTool {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FindExperienceTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Tool for FindExperienceTool {
    fn name(&self) -> &str {
        "find_experience"
    }

    fn description(&self) -> &str {
        "Searches and returns experiences matching the user query, such as \
         tours, restaurants, activities, transport options and other guest services"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: InputSchema::object().property(
                "query",
                PropertySchema::string("The activity or experience the guest is asking about"),
                true,
            ),
        }
    }

    async fn execute(&self, input: Value) -> Result<ToolOutput, ToolError> {
        let query = input
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::invalid_params("query is required"))?;

        Ok(ToolOutput::text(concierge_catalog::find_experience(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_catalog::NO_MATCH_REPLY;

    #[tokio::test]
    async fn test_known_activity_is_described() {
        let tool = FindExperienceTool::new();
        let output = tool
            .execute(serde_json::json!({"query": "can I go scuba diving?"}))
            .await
            .unwrap();

        assert!(output.text.starts_with("Yes! Scuba Diving is available"));
        assert!(output.text.contains("guestservices@sea-breeze.com"));
    }

    #[tokio::test]
    async fn test_unknown_activity_gets_apology() {
        let tool = FindExperienceTool::new();
        let output = tool
            .execute(serde_json::json!({"query": "xyz123"}))
            .await
            .unwrap();

        assert_eq!(output.text, NO_MATCH_REPLY);
    }

    #[tokio::test]
    async fn test_non_string_query_rejected() {
        let tool = FindExperienceTool::new();
        let err = tool
            .execute(serde_json::json!({"query": 42}))
            .await
            .unwrap_err();

        assert!(matches!(err, ToolError::InvalidParams(_)));
    }
}
