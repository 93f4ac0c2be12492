use super::types::{ErrorResponse, InvocationRequest, InvocationResponse};
use crate::{
    Error, Result,
    agent::{AgentRuntimeClient, RuntimeInvocation, generate_session_id, normalize_response},
    config::AgentConfig,
};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info};

pub const PROMPT_REQUIRED_MESSAGE: &str = "El prompt es requerido";
pub const INVOCATION_ERROR_PREFIX: &str = "Error al invocar el agente";

/// The three ways a single invocation can end.
#[derive(Debug)]
pub enum InvocationOutcome {
    Success(InvocationResponse),
    Invalid(String),
    UpstreamFailure(Error),
}

impl InvocationOutcome {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Success(_) => StatusCode::OK,
            Self::Invalid(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for InvocationOutcome {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Success(response) => (status, Json(response)).into_response(),
            Self::Invalid(error) => (status, Json(ErrorResponse { error })).into_response(),
            Self::UpstreamFailure(error) => (
                status,
                Json(ErrorResponse {
                    error: format!(
                        "{}: {}",
                        INVOCATION_ERROR_PREFIX,
                        error.fault_description()
                    ),
                }),
            )
                .into_response(),
        }
    }
}

pub struct RequestAdapter {
    client: Arc<dyn AgentRuntimeClient>,
    config: Arc<AgentConfig>,
}

impl RequestAdapter {
    pub fn new(client: Arc<dyn AgentRuntimeClient>, config: Arc<AgentConfig>) -> Self {
        Self { client, config }
    }

    pub async fn handle(&self, body: &[u8]) -> InvocationOutcome {
        let request = InvocationRequest::from_body(body);

        let Some(prompt) = request.prompt else {
            debug!("Rejecting invocation without prompt");
            return InvocationOutcome::Invalid(PROMPT_REQUIRED_MESSAGE.to_string());
        };

        let session_id = request.session_id.unwrap_or_else(generate_session_id);

        match self.invoke(&prompt, &session_id).await {
            Ok(response) => {
                info!(
                    "Agent answered session {} ({} chars prompt, {} chars reply)",
                    session_id,
                    prompt.chars().count(),
                    response.chars().count()
                );
                InvocationOutcome::Success(InvocationResponse {
                    response,
                    session_id,
                })
            }
            Err(e) => {
                error!("Failed to invoke agent for session {}: {}", session_id, e);
                InvocationOutcome::UpstreamFailure(e)
            }
        }
    }

    async fn invoke(&self, prompt: &str, session_id: &str) -> Result<String> {
        let invocation = RuntimeInvocation::json(&self.config.runtime_arn, session_id, prompt)?;
        let body = self.client.invoke(invocation).await?;
        let text = String::from_utf8(body)?;

        Ok(normalize_response(&text))
    }
}
