//! Concierge agent loop
//!
//! Drives one user message through the external runtime: send the
//! conversation plus tool schemas, execute whatever tools come back, feed
//! the results in, repeat until the runtime answers with text. The round
//! count is bounded so a runtime that keeps asking for tools cannot spin
//! forever.

use serde_json::json;
use std::sync::Arc;

use concierge_core::{AgentRuntime, AgentTurn, Message, ToolDefinition};
use concierge_tools::{ToolExecutor, ToolRegistry};

/// Agent errors
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error(transparent)]
    Runtime(#[from] concierge_core::Error),

    #[error("tool rounds exhausted after {0} rounds")]
    RoundsExhausted(usize),
}

/// The hotel concierge agent
pub struct ConciergeAgent {
    runtime: Arc<dyn AgentRuntime>,
    registry: Arc<ToolRegistry>,
    system_prompt: String,
    max_tool_rounds: usize,
}

impl ConciergeAgent {
    pub fn new(
        runtime: Arc<dyn AgentRuntime>,
        registry: Arc<ToolRegistry>,
        system_prompt: impl Into<String>,
        max_tool_rounds: usize,
    ) -> Self {
        Self {
            runtime,
            registry,
            system_prompt: system_prompt.into(),
            max_tool_rounds,
        }
    }

    /// Tool definitions advertised to the runtime
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.registry
            .list_tools()
            .into_iter()
            .map(|schema| ToolDefinition {
                name: schema.name,
                description: schema.description,
                parameters: serde_json::to_value(&schema.input_schema)
                    .unwrap_or_else(|_| json!({"type": "object"})),
            })
            .collect()
    }

    /// Answer one user message
    ///
    /// The message may be empty; it is forwarded as-is and the runtime
    /// decides what to make of it.
    pub async fn process(&self, message: &str) -> Result<String, AgentError> {
        let tools = self.tool_definitions();
        let mut messages = vec![
            Message::system(&self.system_prompt),
            Message::user(message),
        ];

        for round in 0..self.max_tool_rounds {
            let turn = self.runtime.complete(&messages, &tools).await?;

            if turn.is_final() {
                return Ok(extract_text(turn));
            }

            tracing::debug!(
                round,
                calls = turn.tool_calls.len(),
                model = self.runtime.model_id(),
                "Executing tool calls"
            );

            messages.push(Message::assistant_with_calls(
                turn.text.unwrap_or_default(),
                turn.tool_calls.clone(),
            ));

            for call in turn.tool_calls {
                let content = match self.registry.execute(&call.name, call.arguments).await {
                    Ok(output) => output.text,
                    // Tool failures go back to the runtime as text so it can
                    // recover or apologize instead of killing the request.
                    Err(err) => {
                        tracing::warn!(tool = %call.name, error = %err, "Tool call failed");
                        format!("Error: {}", err)
                    }
                };
                messages.push(Message::tool(call.id, content));
            }
        }

        Err(AgentError::RoundsExhausted(self.max_tool_rounds))
    }
}

/// Final answer text for a turn
///
/// A final turn without text content falls back to its serialized form so
/// the caller always gets a string.
fn extract_text(turn: AgentTurn) -> String {
    match turn.text {
        Some(text) => text,
        None => serde_json::to_string(&turn).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use concierge_core::{Result, Role, ToolInvocation};
    use concierge_tools::create_concierge_registry;
    use std::sync::Mutex;

    /// Runtime that replays scripted turns and records what it was sent
    struct ScriptedRuntime {
        turns: Mutex<Vec<AgentTurn>>,
        seen: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedRuntime {
        fn new(turns: Vec<AgentTurn>) -> Self {
            Self {
                turns: Mutex::new(turns),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AgentRuntime for ScriptedRuntime {
        async fn complete(
            &self,
            messages: &[Message],
            _tools: &[ToolDefinition],
        ) -> Result<AgentTurn> {
            self.seen.lock().unwrap().push(messages.to_vec());
            Ok(self.turns.lock().unwrap().remove(0))
        }

        fn model_id(&self) -> &str {
            "scripted"
        }
    }

    fn agent_with(turns: Vec<AgentTurn>, max_rounds: usize) -> (ConciergeAgent, Arc<ScriptedRuntime>) {
        let runtime = Arc::new(ScriptedRuntime::new(turns));
        let registry = Arc::new(create_concierge_registry(Arc::new(Default::default())));
        let agent = ConciergeAgent::new(runtime.clone(), registry, "You are a concierge.", max_rounds);
        (agent, runtime)
    }

    #[tokio::test]
    async fn test_final_text_first_round() {
        let (agent, runtime) = agent_with(vec![AgentTurn::text("Hello!")], 4);

        let answer = agent.process("hi").await.unwrap();
        assert_eq!(answer, "Hello!");

        let seen = runtime.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0][0].role, Role::System);
        assert_eq!(seen[0][1].content, "hi");
    }

    #[tokio::test]
    async fn test_tool_round_trip() {
        let call = ToolInvocation {
            id: "call_1".to_string(),
            name: "find_experience".to_string(),
            arguments: serde_json::json!({"query": "surfing"}),
        };
        let (agent, runtime) = agent_with(
            vec![AgentTurn::calls(vec![call]), AgentTurn::text("Surf's up!")],
            4,
        );

        let answer = agent.process("can I surf here?").await.unwrap();
        assert_eq!(answer, "Surf's up!");

        // Second completion sees the assistant call turn and the tool result.
        let seen = runtime.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        let second = &seen[1];
        assert_eq!(second[2].role, Role::Assistant);
        assert_eq!(second[3].role, Role::Tool);
        assert_eq!(second[3].tool_call_id.as_deref(), Some("call_1"));
        assert!(second[3].content.starts_with("Yes! Surfing is available"));
    }

    #[tokio::test]
    async fn test_unknown_tool_reported_as_text() {
        let call = ToolInvocation {
            id: "call_1".to_string(),
            name: "book_helicopter".to_string(),
            arguments: serde_json::json!({}),
        };
        let (agent, runtime) = agent_with(
            vec![AgentTurn::calls(vec![call]), AgentTurn::text("Sorry, no.")],
            4,
        );

        let answer = agent.process("helicopter please").await.unwrap();
        assert_eq!(answer, "Sorry, no.");

        let seen = runtime.seen.lock().unwrap();
        assert!(seen[1][3].content.starts_with("Error:"));
    }

    #[tokio::test]
    async fn test_rounds_exhausted() {
        let call = || {
            AgentTurn::calls(vec![ToolInvocation {
                id: "c".to_string(),
                name: "find_experience".to_string(),
                arguments: serde_json::json!({"query": "golf"}),
            }])
        };
        let (agent, _) = agent_with(vec![call(), call()], 2);

        let err = agent.process("golf").await.unwrap_err();
        assert!(matches!(err, AgentError::RoundsExhausted(2)));
    }

    #[tokio::test]
    async fn test_empty_message_accepted() {
        let (agent, runtime) = agent_with(vec![AgentTurn::text("How can I help?")], 4);

        let answer = agent.process("").await.unwrap();
        assert_eq!(answer, "How can I help?");

        let seen = runtime.seen.lock().unwrap();
        assert_eq!(seen[0][1].content, "");
    }

    #[tokio::test]
    async fn test_textless_final_turn_serialized() {
        let turn = AgentTurn {
            text: None,
            tool_calls: Vec::new(),
        };
        let (agent, _) = agent_with(vec![turn], 4);

        let answer = agent.process("hi").await.unwrap();
        assert!(answer.contains("\"text\":null"));
    }
}
