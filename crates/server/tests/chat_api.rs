//! Chat API integration tests
//!
//! Drives the router directly with a scripted runtime standing in for the
//! external completion service.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use std::sync::Arc;
use tower::ServiceExt;

use concierge_agent::ConciergeAgent;
use concierge_catalog::HotelData;
use concierge_config::Settings;
use concierge_core::{AgentRuntime, AgentTurn, Message, Result, ToolDefinition};
use concierge_server::{create_router, AppState};
use concierge_tools::create_concierge_registry;

/// Runtime that echoes the user message back, or fails on demand
struct EchoRuntime {
    fail: bool,
}

#[async_trait]
impl AgentRuntime for EchoRuntime {
    async fn complete(
        &self,
        messages: &[Message],
        _tools: &[ToolDefinition],
    ) -> Result<AgentTurn> {
        if self.fail {
            return Err(concierge_core::Error::runtime("backend unavailable"));
        }
        let user = messages
            .iter()
            .find(|m| m.role == concierge_core::Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_default();
        Ok(AgentTurn::text(format!("echo:{}", user)))
    }

    fn model_id(&self) -> &str {
        "echo"
    }
}

fn test_app(fail: bool) -> axum::Router {
    let settings = Arc::new(Settings::default());
    let hotel_data = Arc::new(HotelData::empty_shell());
    let registry = Arc::new(create_concierge_registry(hotel_data.clone()));
    let agent = Arc::new(ConciergeAgent::new(
        Arc::new(EchoRuntime { fail }),
        registry.clone(),
        "You are a concierge.",
        4,
    ));
    create_router(AppState::new(settings, registry, agent, hotel_data))
}

fn post_chat(message: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::json!({"message": message}).to_string(),
        ))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_returns_agent_response() {
    let response = test_app(false)
        .oneshot(post_chat("do you have a pool?"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "echo:do you have a pool?");
}

#[tokio::test]
async fn empty_message_is_accepted_and_forwarded() {
    let response = test_app(false).oneshot(post_chat("")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "echo:");
}

#[tokio::test]
async fn missing_message_field_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = test_app(false).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn runtime_failure_maps_to_500() {
    let response = test_app(true).oneshot(post_chat("hi")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_tool_count() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = test_app(false).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["tools"], 2);
}

#[tokio::test]
async fn tools_endpoint_lists_registered_tools() {
    let request = Request::builder()
        .uri("/api/tools")
        .body(Body::empty())
        .unwrap();

    let response = test_app(false).oneshot(request).await.unwrap();
    let body = body_json(response).await;

    let names: Vec<&str> = body["tools"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"find_experience"));
    assert!(names.contains(&"hotel_info"));
}
