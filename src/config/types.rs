use serde::{Deserialize, Serialize};

pub const DEFAULT_AGENT_ARN: &str =
    "arn:aws:bedrock-agentcore:us-east-2:413370510567:runtime/MedicalAgent-6Kd6khBvsu";
pub const DEFAULT_REGION: &str = "us-east-2";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_runtime_arn")]
    pub runtime_arn: String,
    #[serde(default = "default_region")]
    pub region: String,
}

/// Only used when running outside Lambda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            runtime_arn: default_runtime_arn(),
            region: default_region(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_runtime_arn() -> String {
    DEFAULT_AGENT_ARN.to_string()
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}
