//! OpenAI-compatible chat-completions client
//!
//! Implements `AgentRuntime` over the `/chat/completions` endpoint. Tool
//! call arguments travel as JSON-encoded strings on this wire; everything
//! else maps one-to-one onto the core chat types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use concierge_config::AgentConfig;
use concierge_core::{AgentRuntime, AgentTurn, Error, Message, Result, Role, ToolDefinition, ToolInvocation};

/// Environment variable holding the API key
const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// OpenAI chat-completions runtime
pub struct OpenAiRuntime {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: usize,
}

impl OpenAiRuntime {
    /// Build a runtime from settings, reading the API key from the environment
    pub fn from_config(config: &AgentConfig) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::runtime(format!("{} is not set", API_KEY_ENV)))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::runtime(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl AgentRuntime for OpenAiRuntime {
    async fn complete(
        &self,
        messages: &[Message],
        tools: &[ToolDefinition],
    ) -> Result<AgentTurn> {
        let request = CompletionRequest {
            model: &self.model,
            messages: messages.iter().map(WireMessage::from).collect(),
            tools: if tools.is_empty() {
                None
            } else {
                Some(tools.iter().map(WireTool::from).collect())
            },
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let url = format!("{}/chat/completions", self.endpoint);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::runtime(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::runtime(format!(
                "completion request failed with {}: {}",
                status, body
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::invalid_response(e.to_string()))?;

        parse_turn(completion)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

fn parse_turn(completion: CompletionResponse) -> Result<AgentTurn> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| Error::invalid_response("completion carried no choices"))?;

    let mut tool_calls = Vec::new();
    for call in choice.message.tool_calls.unwrap_or_default() {
        let arguments: Value = serde_json::from_str(&call.function.arguments)
            .map_err(|e| Error::invalid_response(format!("tool call arguments: {}", e)))?;
        tool_calls.push(ToolInvocation {
            id: call.id,
            name: call.function.name,
            arguments,
        });
    }

    Ok(AgentTurn {
        text: choice.message.content.filter(|c| !c.is_empty()),
        tool_calls,
    })
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<WireTool>>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        let role = match message.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        };

        let tool_calls = if message.tool_calls.is_empty() {
            None
        } else {
            Some(message.tool_calls.iter().map(WireToolCall::from).collect())
        };

        // Assistant tool-call turns may have no text; the wire wants null
        // there. Every other role keeps its content verbatim, including the
        // empty string, which user and system turns may legitimately carry.
        let content = if matches!(message.role, Role::Assistant)
            && tool_calls.is_some()
            && message.content.is_empty()
        {
            None
        } else {
            Some(message.content.clone())
        };

        Self {
            role,
            content,
            tool_calls,
            tool_call_id: message.tool_call_id.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    function: WireFunctionCall,
}

impl From<&ToolInvocation> for WireToolCall {
    fn from(call: &ToolInvocation) -> Self {
        Self {
            id: call.id.clone(),
            kind: "function".to_string(),
            function: WireFunctionCall {
                name: call.name.clone(),
                arguments: call.arguments.to_string(),
            },
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WireFunctionCall {
    name: String,
    arguments: String,
}

#[derive(Serialize)]
struct WireTool {
    #[serde(rename = "type")]
    kind: &'static str,
    function: WireFunctionDef,
}

impl From<&ToolDefinition> for WireTool {
    fn from(def: &ToolDefinition) -> Self {
        Self {
            kind: "function",
            function: WireFunctionDef {
                name: def.name.clone(),
                description: def.description.clone(),
                parameters: def.parameters.clone(),
            },
        }
    }
}

#[derive(Serialize)]
struct WireFunctionDef {
    name: String,
    description: String,
    parameters: Value,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireToolCall>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_final_text_turn() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"content": "Welcome to Sea Breeze!", "tool_calls": null}}]}"#,
        )
        .unwrap();

        let turn = parse_turn(completion).unwrap();
        assert!(turn.is_final());
        assert_eq!(turn.text.as_deref(), Some("Welcome to Sea Breeze!"));
    }

    #[test]
    fn test_parse_tool_call_turn() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {"name": "hotel_info", "arguments": "{\"query\": \"menu\"}"}
                }]
            }}]}"#,
        )
        .unwrap();

        let turn = parse_turn(completion).unwrap();
        assert!(!turn.is_final());
        assert_eq!(turn.tool_calls[0].name, "hotel_info");
        assert_eq!(turn.tool_calls[0].arguments["query"], "menu");
    }

    #[test]
    fn test_parse_rejects_malformed_arguments() {
        let completion: CompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {
                "content": null,
                "tool_calls": [{
                    "id": "call_1",
                    "type": "function",
                    "function": {"name": "hotel_info", "arguments": "{broken"}
                }]
            }}]}"#,
        )
        .unwrap();

        assert!(parse_turn(completion).is_err());
    }

    #[test]
    fn test_wire_message_null_content_for_call_turns() {
        let message = Message::assistant_with_calls(
            "",
            vec![ToolInvocation {
                id: "call_1".to_string(),
                name: "find_experience".to_string(),
                arguments: serde_json::json!({"query": "surfing"}),
            }],
        );

        let wire = WireMessage::from(&message);
        let value = serde_json::to_value(&wire).unwrap();
        assert!(value["content"].is_null());
        assert_eq!(value["tool_calls"][0]["function"]["name"], "find_experience");
    }

    #[test]
    fn test_wire_message_keeps_empty_user_content() {
        let wire = WireMessage::from(&Message::user(""));
        let value = serde_json::to_value(&wire).unwrap();

        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "");
    }

    #[test]
    fn test_wire_message_keeps_assistant_text_alongside_calls() {
        let message = Message::assistant_with_calls(
            "Let me check.",
            vec![ToolInvocation {
                id: "call_1".to_string(),
                name: "hotel_info".to_string(),
                arguments: serde_json::json!({"query": "menu"}),
            }],
        );

        let value = serde_json::to_value(WireMessage::from(&message)).unwrap();
        assert_eq!(value["content"], "Let me check.");
    }
}
