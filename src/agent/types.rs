use crate::Result;
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A single outbound call to the agent runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInvocation {
    pub runtime_arn: String,
    pub session_id: String,
    pub content_type: String,
    pub accept: String,
    pub payload: Vec<u8>,
}

#[derive(Debug, Serialize)]
struct PromptPayload<'a> {
    prompt: &'a str,
}

impl RuntimeInvocation {
    /// Encodes `{"prompt": ...}` as the payload and negotiates JSON both ways.
    pub fn json(runtime_arn: &str, session_id: &str, prompt: &str) -> Result<Self> {
        let payload = serde_json::to_vec(&PromptPayload { prompt })?;

        Ok(Self {
            runtime_arn: runtime_arn.to_string(),
            session_id: session_id.to_string(),
            content_type: JSON_CONTENT_TYPE.to_string(),
            accept: JSON_CONTENT_TYPE.to_string(),
            payload,
        })
    }
}
