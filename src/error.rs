use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Agent runtime error: {0}")]
    AgentRuntime(String),

    #[error("Response decoding error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn agent_runtime(msg: impl Into<String>) -> Self {
        Self::AgentRuntime(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The fault itself, without the variant label for upstream failures.
    pub fn fault_description(&self) -> String {
        match self {
            Self::AgentRuntime(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_display_includes_description() {
        let err = Error::agent_runtime("ThrottlingException: rate exceeded");
        assert_eq!(
            err.to_string(),
            "Agent runtime error: ThrottlingException: rate exceeded"
        );
    }

    #[test]
    fn test_fault_description_strips_agent_runtime_label() {
        let err = Error::agent_runtime("ThrottlingException: rate exceeded");
        assert_eq!(err.fault_description(), "ThrottlingException: rate exceeded");

        let err = Error::config("bad region");
        assert_eq!(err.fault_description(), "Configuration error: bad region");
    }

    #[test]
    fn test_decode_error_from_invalid_utf8() {
        let err: Error = String::from_utf8(vec![0xff, 0xfe]).unwrap_err().into();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().starts_with("Response decoding error"));
    }
}
