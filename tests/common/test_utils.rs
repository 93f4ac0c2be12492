use super::mocks::MockAgentRuntime;
use agentcore_proxy::{
    config::AgentConfig,
    server::{self, RequestAdapter, handlers::AppState},
};
use axum::{Router, body::Body, http::Request, response::Response};
use serde_json::Value;
use std::sync::Arc;

pub const TEST_AGENT_ARN: &str = "arn:aws:bedrock-agentcore:us-east-2:000000000000:runtime/TestAgent";

pub fn create_test_agent_config() -> AgentConfig {
    AgentConfig {
        runtime_arn: TEST_AGENT_ARN.to_string(),
        region: "us-east-2".to_string(),
    }
}

/// Adapter wired to the given mock; the mock keeps recording through the shared Arc.
pub fn create_adapter(mock: &MockAgentRuntime) -> RequestAdapter {
    RequestAdapter::new(Arc::new(mock.clone()), Arc::new(create_test_agent_config()))
}

pub fn create_test_app(mock: &MockAgentRuntime) -> Router {
    server::router(AppState {
        adapter: Arc::new(create_adapter(mock)),
    })
}

pub fn json_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn read_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
