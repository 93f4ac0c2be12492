use agentcore_proxy::{Error, Result, agent::AgentRuntimeClient, agent::RuntimeInvocation};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Mock agent runtime for testing
#[derive(Debug, Clone)]
pub struct MockAgentRuntime {
    pub invocations: Arc<Mutex<Vec<RuntimeInvocation>>>,
    pub body: Vec<u8>,
    pub error: Option<String>,
}

impl MockAgentRuntime {
    pub fn new() -> Self {
        Self {
            invocations: Arc::new(Mutex::new(Vec::new())),
            body: Vec::new(),
            error: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_invocations(&self) -> Vec<RuntimeInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn invocation_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

#[async_trait]
impl AgentRuntimeClient for MockAgentRuntime {
    async fn invoke(&self, invocation: RuntimeInvocation) -> Result<Vec<u8>> {
        self.invocations.lock().unwrap().push(invocation);

        if let Some(ref error) = self.error {
            return Err(Error::agent_runtime(error.clone()));
        }

        Ok(self.body.clone())
    }
}

impl Default for MockAgentRuntime {
    fn default() -> Self {
        Self::new()
    }
}
