use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Inbound body after lenient parsing. Absent or unusable fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationRequest {
    pub prompt: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub response: String,
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl InvocationRequest {
    /// Never fails: a missing or malformed body simply yields no prompt.
    pub fn from_body(body: &[u8]) -> Self {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };

        Self {
            prompt: non_empty_string(&value, "prompt"),
            session_id: non_empty_string(&value, "sessionId"),
        }
    }
}

fn non_empty_string(value: &Value, field: &str) -> Option<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
