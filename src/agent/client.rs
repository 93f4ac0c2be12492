use super::types::RuntimeInvocation;
use crate::{Error, Result, config::AgentConfig};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_bedrockagentcore::{
    Client, config::Region, error::DisplayErrorContext, primitives::Blob,
};
use tracing::debug;

#[async_trait]
pub trait AgentRuntimeClient: Send + Sync {
    /// Invokes the runtime and returns the fully read response body.
    async fn invoke(&self, invocation: RuntimeInvocation) -> Result<Vec<u8>>;
}

pub struct AgentCoreClient {
    client: Client,
}

impl AgentCoreClient {
    pub async fn new(config: &AgentConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
        }
    }
}

#[async_trait]
impl AgentRuntimeClient for AgentCoreClient {
    async fn invoke(&self, invocation: RuntimeInvocation) -> Result<Vec<u8>> {
        debug!(
            "Invoking agent runtime {} for session {} ({} byte payload)",
            invocation.runtime_arn,
            invocation.session_id,
            invocation.payload.len()
        );

        let output = self
            .client
            .invoke_agent_runtime()
            .agent_runtime_arn(invocation.runtime_arn)
            .runtime_session_id(invocation.session_id)
            .content_type(invocation.content_type)
            .accept(invocation.accept)
            .payload(Blob::new(invocation.payload))
            .send()
            .await
            .map_err(|e| Error::agent_runtime(DisplayErrorContext(&e).to_string()))?;

        let body = output
            .response
            .collect()
            .await
            .map_err(|e| Error::agent_runtime(format!("failed to read response stream: {}", e)))?
            .into_bytes();

        debug!("Received {} bytes from agent runtime", body.len());

        Ok(body.to_vec())
    }
}
