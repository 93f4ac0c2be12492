mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Builds the process configuration: optional YAML file, then environment
/// overrides (`AGENT_ARN`, `AWS_REGION`, `PORT`).
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => read_file(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            read_file(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    let config = config.with_env_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

async fn read_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", path, e)))?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(arn) = lookup("AGENT_ARN") {
            self.agent.runtime_arn = arn;
        }
        if let Some(region) = lookup("AWS_REGION") {
            self.agent.region = region;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.agent.runtime_arn.trim().is_empty() {
            return Err(Error::config("agent.runtime_arn must not be empty"));
        }
        if self.agent.region.trim().is_empty() {
            return Err(Error::config("agent.region must not be empty"));
        }
        Ok(())
    }
}
